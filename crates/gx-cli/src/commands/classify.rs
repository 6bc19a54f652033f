use colored::Colorize;
use gx_oracle::classify;

pub fn run(text: &str) -> Result<(), String> {
    let c = classify(text);
    let info = c.trigram.info();

    println!(
        "  {} {} ({}, {})",
        c.trigram.name().bold(),
        info.pinyin,
        info.nature,
        info.nature_en
    );
    let element = c.element.info();
    println!(
        "  Element: {} ({}, {}, {})",
        c.element, element.direction, element.season, element.nature
    );
    match c.keyword {
        Some(k) => println!("  Matched: {k}"),
        None => {
            let count = text.trim().chars().count();
            println!(
                "  No keyword matched; {count} characters, remainder {}",
                count % 8
            );
        }
    }

    Ok(())
}
