use colored::{ColoredString, Colorize};
use gx_almanac::ChineseCalendar;
use gx_oracle::{DivinationContext, Fortune, QuestionType, Reading, divine};

use super::almanac::print_almanac;

pub fn run(
    object: &str,
    question: Option<&str>,
    question_type: &str,
    date: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let question_type = QuestionType::parse(question_type).map_err(|e| e.to_string())?;
    let at = super::resolve_time(date)?;
    let ctx = DivinationContext::new(at, object.trim(), question_type);

    let reading = divine(&ctx, &ChineseCalendar).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_reading(&reading, question);
    Ok(())
}

fn fortune_label(fortune: Fortune) -> ColoredString {
    match fortune {
        Fortune::Good => fortune.label().green().bold(),
        Fortune::Bad => fortune.label().red().bold(),
        Fortune::Neutral => fortune.label().yellow().bold(),
    }
}

fn print_reading(reading: &Reading, question: Option<&str>) {
    let p = &reading.prediction;
    let a = &p.analysis;

    if let Some(q) = question.filter(|q| !q.trim().is_empty()) {
        println!("  {} {}", "问".bold(), q.trim());
        println!();
    }

    println!("  本卦  {}", p.hexagram.to_string().bold());
    println!("  变卦  {}", p.changed_hexagram.to_string().bold());
    println!(
        "  动爻  第{}爻    {}",
        p.moving_line.number(),
        fortune_label(p.fortune)
    );
    println!();
    println!("  {}", a.time_analysis);
    println!("  {}", a.object_analysis);
    println!("  {}", a.hexagram_analysis.meaning);
    println!("  {}", a.hexagram_analysis.description.dimmed());
    println!("  {}", a.changed_hexagram.meaning);
    println!();
    println!("  {}", a.comprehensive.bold());

    if let Some(verse) = &a.hexagram_analysis.shao_yong {
        println!();
        println!("  邵雍解卦：{verse}");
    }
    if let Some(image) = &a.hexagram_analysis.traditional {
        println!("  象曰：{image}");
    }

    println!();
    print_almanac(&reading.almanac);

    if let Some(palace) = reading.palace {
        println!();
        println!(
            "  小六壬  {}  {}",
            palace.name().bold(),
            fortune_label(palace.fortune)
        );
        println!("  {}", palace.description);
        println!("  {}", palace.poem_lines().collect::<Vec<_>>().join(" "));
        println!("  {}", palace.suggestion.dimmed());
    }

    if let Some(guidance) = &reading.guidance {
        if let (Some(heading), Some(mantra)) = (guidance.heading, guidance.mantra) {
            println!();
            println!("  {}", heading.bold());
            for line in mantra.lines() {
                println!("    {line}。");
            }
        }
        println!();
        println!("  {}", guidance.disclaimer.dimmed());
    }
}
