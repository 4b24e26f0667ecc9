use indoc::indoc;
use roll::cipher::Roller;
use roll::record::BlockReader;

fn run(input: &str) -> eyre::Result<Vec<String>> {
    BlockReader::new(input.as_bytes())
        .map(|record| {
            let record = record?;
            let roller = Roller::new(record.commands)?;

            Ok(roller.roll(&record.plaintext))
        })
        .collect()
}

#[test]
fn rotates_each_block() -> eyre::Result<()> {
    let input = indoc! {"
        3
        abc
        1 2 3
        5
        hello
        2 2 5
        3
        abc
        0
    "};

    assert_eq!(run(input)?, vec!["ddd", "khmmp", "abc"]);

    Ok(())
}

#[test]
fn no_input_produces_no_output() -> eyre::Result<()> {
    assert!(run("")?.is_empty());

    Ok(())
}

#[test]
fn empty_command_line_is_rejected() {
    assert!(run("3\nabc\n\n").is_err());
}
