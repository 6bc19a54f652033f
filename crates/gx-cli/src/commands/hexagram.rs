use colored::Colorize;
use gx_core::{Line, Trigram, find_hexagram, hexagram_detail};

pub fn run(upper: &str, lower: &str) -> Result<(), String> {
    let upper = Trigram::parse(upper).map_err(|e| e.to_string())?;
    let lower = Trigram::parse(lower).map_err(|e| e.to_string())?;
    let h = find_hexagram(upper.index(), lower.index())
        .ok_or_else(|| format!("no hexagram for {upper} over {lower}"))?;

    let number = h
        .king_wen_number()
        .map(|n| format!("#{n} "))
        .unwrap_or_default();
    println!("  {number}{}", h.to_string().bold());
    println!("  {upper} over {lower}");
    let (ue, le) = (upper.element(), lower.element());
    println!("  {}", ue.relation(le).describe(ue, le));
    println!();

    if let Some(lines) = h.lines() {
        for line in lines.iter().rev() {
            match line {
                Line::Yang => println!("    ━━━━━━━"),
                Line::Yin => println!("    ━━━ ━━━"),
            }
        }
        println!();
    }

    println!("  {}", h.description);
    if !h.judgment.is_empty() {
        println!("  {}", h.judgment.dimmed());
    }

    if let Some(detail) = hexagram_detail(h.upper, h.lower) {
        if let Some(image) = detail.traditional {
            println!();
            println!("  象曰：{image}");
        }
        if let Some(verse) = detail.shao_yong {
            println!("  邵雍：{verse}");
        }
    }

    Ok(())
}
