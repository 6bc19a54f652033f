use std::io::{self, BufRead, Write};

use colored::Colorize;
use gx_almanac::ChineseCalendar;
use gx_oracle::context::parse_datetime;
use gx_oracle::{DivinationSession, QuestionType, SessionConfig};

pub fn run(question_type: &str, date: Option<&str>) -> Result<(), String> {
    let question_type = QuestionType::parse(question_type).map_err(|e| e.to_string())?;
    let config = SessionConfig::default().with_question_type(question_type);
    let mut session = DivinationSession::new(ChineseCalendar, config);
    if let Some(date) = date {
        session.set_at(Some(parse_datetime(date).map_err(|e| e.to_string())?));
    }

    println!("  {} divination session", "Starting".bold());
    println!(
        "  Question type: {question_type} ({})",
        question_type.label()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
