//! Interactive divination session.
//!
//! `DivinationSession` owns an almanac provider, the repeated-question guard
//! and a history of readings. [`DivinationSession::process`] interprets one
//! line of user input, which is what the CLI REPL feeds it.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use gx_almanac::{AlmanacInfo, AlmanacProvider};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::context::{DivinationContext, QuestionType, parse_datetime};
use crate::error::{OracleError, OracleResult};
use crate::fortune::Fortune;
use crate::guard::QuestionGuard;
use crate::reading::{Reading, divine};

/// What the asker brings: the observed object and the question itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question {
    /// The observed object, which picks the upper trigram.
    pub object_name: String,
    /// The question text, used only by the repeat guard.
    pub text: String,
}

impl Question {
    /// Create a question.
    pub fn new(object_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            text: text.into(),
        }
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The question text.
    pub question: String,
    /// The observed object.
    pub object_name: String,
    /// Category asked under.
    pub question_type: QuestionType,
    /// Timestamp the reading was cast for.
    pub cast_for: NaiveDateTime,
    /// Main hexagram name.
    pub hexagram: String,
    /// Changed hexagram name.
    pub changed_hexagram: String,
    /// Tone of the reading.
    pub fortune: Fortune,
    /// Palace name, when cast.
    pub palace: Option<String>,
    /// When the question was asked.
    pub timestamp: DateTime<Utc>,
}

/// A divination session over some almanac provider.
pub struct DivinationSession<P> {
    provider: P,
    config: SessionConfig,
    guard: QuestionGuard,
    history: Vec<HistoryEntry>,
    question_type: QuestionType,
    at: Option<NaiveDateTime>,
}

impl<P: AlmanacProvider> DivinationSession<P> {
    /// Create a session. Readings use the current local time until
    /// [`set_at`](Self::set_at) pins one.
    pub fn new(provider: P, config: SessionConfig) -> Self {
        let question_type = config.question_type;
        Self {
            provider,
            config,
            guard: QuestionGuard::new(),
            history: Vec::new(),
            question_type,
            at: None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the answered questions, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Get the current question category.
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    /// Change the question category for later questions.
    pub fn set_question_type(&mut self, question_type: QuestionType) {
        self.question_type = question_type;
    }

    /// Pin the timestamp readings are cast for. `None` means "now".
    pub fn set_at(&mut self, at: Option<NaiveDateTime>) {
        self.at = at;
    }

    /// The timestamp the next reading will be cast for.
    pub fn now(&self) -> NaiveDateTime {
        self.at.unwrap_or_else(|| Local::now().naive_local())
    }

    /// Answer a question.
    ///
    /// With the guard enabled a repeated question fails before anything is
    /// computed. A question is only remembered once its reading succeeded.
    pub fn ask(&mut self, question: &Question) -> OracleResult<Reading> {
        if self.config.repeat_guard {
            self.guard.check(&question.text)?;
        }

        let ctx = DivinationContext::new(self.now(), question.object_name.trim(), self.question_type);
        let mut reading = divine(&ctx, &self.provider)?;
        if !self.config.xiaoliuren {
            reading = reading.without_palace();
        }
        if !self.config.guidance {
            reading = reading.without_guidance();
        }

        if self.config.repeat_guard {
            self.guard.record(&question.text);
        }
        self.history.push(HistoryEntry {
            question: question.text.trim().to_string(),
            object_name: ctx.object_name.clone(),
            question_type: ctx.question_type,
            cast_for: ctx.date,
            hexagram: reading.prediction.hexagram.name.to_string(),
            changed_hexagram: reading.prediction.changed_hexagram.name.to_string(),
            fortune: reading.prediction.fortune,
            palace: reading.palace.map(|p| p.name().to_string()),
            timestamp: Utc::now(),
        });

        Ok(reading)
    }

    /// Almanac lookup without a reading.
    pub fn quick_check(&self, at: NaiveDateTime) -> OracleResult<AlmanacInfo> {
        self.provider.lunar_almanac(at).map_err(OracleError::from)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> OracleResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let cmd = word.to_lowercase();
        let rest = rest.trim();

        match cmd.as_str() {
            "ask" => self.do_ask(rest),
            "type" => self.do_type(rest),
            "at" => self.do_at(rest),
            "almanac" => self.do_almanac(),
            "history" => self.do_history(),
            "help" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(OracleError::UnknownCommand(word.to_string())),
        }
    }

    fn do_ask(&mut self, rest: &str) -> OracleResult<String> {
        let question = parse_ask_input(rest)?;
        let reading = self.ask(&question)?;
        Ok(render_reading(&reading))
    }

    fn do_type(&mut self, rest: &str) -> OracleResult<String> {
        if rest.is_empty() {
            return Ok(format!(
                "Question type: {} ({})",
                self.question_type,
                self.question_type.label()
            ));
        }
        let question_type = QuestionType::parse(rest)?;
        self.set_question_type(question_type);
        Ok(format!(
            "Question type set to {question_type} ({})",
            question_type.label()
        ))
    }

    fn do_at(&mut self, rest: &str) -> OracleResult<String> {
        match rest.to_lowercase().as_str() {
            "" => Ok(match self.at {
                Some(at) => format!("Casting for {}", at.format("%Y-%m-%d %H:%M")),
                None => "Casting for the current time".to_string(),
            }),
            "now" => {
                self.set_at(None);
                Ok("Casting for the current time".to_string())
            }
            _ => {
                let at = parse_datetime(rest)?;
                self.set_at(Some(at));
                Ok(format!("Casting for {}", at.format("%Y-%m-%d %H:%M")))
            }
        }
    }

    fn do_almanac(&self) -> OracleResult<String> {
        let info = self.quick_check(self.now())?;
        Ok(render_almanac(&info))
    }

    fn do_history(&self) -> OracleResult<String> {
        if self.history.is_empty() {
            return Ok("No questions asked yet.".to_string());
        }
        let mut out = format!("History ({}):\n", self.history.len());
        for (i, e) in self.history.iter().enumerate() {
            let question = if e.question.is_empty() {
                "(no question)"
            } else {
                e.question.as_str()
            };
            out.push_str(&format!(
                "  {}. [{}] {} / {}: {}之{} ({})\n",
                i + 1,
                e.question_type.label(),
                e.object_name,
                question,
                e.hexagram,
                e.changed_hexagram,
                e.fortune.label()
            ));
        }
        Ok(out.trim_end().to_string())
    }
}

/// Parse `ask` input: `<object> [| <question>]`.
fn parse_ask_input(input: &str) -> OracleResult<Question> {
    let (object, text) = match input.split_once(['|', '｜']) {
        Some((object, text)) => (object.trim(), text.trim()),
        None => (input.trim(), ""),
    };
    if object.is_empty() {
        return Err(OracleError::InvalidInput(
            "usage: ask <object> | <question>".to_string(),
        ));
    }
    Ok(Question::new(object, text))
}

/// Plain-text rendering of an almanac record.
pub fn render_almanac(info: &AlmanacInfo) -> String {
    let mut out = format!(
        "农历 {} {}日 {}时\n值日 {}  冲 {}  煞 {}\n宜 {}\n忌 {}",
        info.lunar_str,
        info.day_gan_zhi,
        info.time_branch,
        info.zhi_xing,
        info.chong,
        info.sha,
        info.yi.join(" "),
        info.ji.join(" "),
    );
    if !info.shen_sha.is_empty() {
        out.push_str(&format!("\n神煞 {}", info.shen_sha.join(" ")));
    }
    if info.is_dangerous_day() {
        out.push_str(&format!("\n{}", crate::guidance::DANGER_WARNING));
    }
    out
}

/// Plain-text rendering of a reading.
pub fn render_reading(reading: &Reading) -> String {
    let p = &reading.prediction;
    let a = &p.analysis;
    let mut out = format!(
        "本卦 {}\n变卦 {}\n动爻 第{}爻  {}\n\n{}\n{}\n{}\n{}\n\n{}",
        p.hexagram,
        p.changed_hexagram,
        p.moving_line.number(),
        p.fortune.label(),
        a.time_analysis,
        a.object_analysis,
        a.hexagram_analysis.meaning,
        a.changed_hexagram.meaning,
        a.comprehensive,
    );
    if let Some(verse) = &a.hexagram_analysis.shao_yong {
        out.push_str(&format!("\n邵雍解卦：{verse}"));
    }
    if let Some(image) = &a.hexagram_analysis.traditional {
        out.push_str(&format!("\n象曰：{image}"));
    }
    out.push_str(&format!("\n\n{}", render_almanac(&reading.almanac)));
    if let Some(palace) = reading.palace {
        out.push_str(&format!(
            "\n\n小六壬 {} ({})\n{}\n{}\n{}",
            palace.name(),
            palace.fortune.label(),
            palace.description,
            palace.poem_lines().collect::<Vec<_>>().join(" "),
            palace.suggestion
        ));
    }
    if let Some(guidance) = &reading.guidance {
        if let (Some(heading), Some(mantra)) = (guidance.heading, guidance.mantra) {
            out.push_str(&format!("\n\n{heading}\n{}", mantra.text()));
        }
        out.push_str(&format!("\n\n{}", guidance.disclaimer));
    }
    out
}

fn help_text() -> String {
    "Divination Commands:
  ask <object> | <question>     Cast a reading for an observed object
  type [category]               Show or set the question type
                                (general, health, mental, career, love)
  at [datetime|now]             Show or pin the time readings are cast for
  almanac                       Show the almanac for the current time
  history                       List answered questions
  help                          Show this help
  quit                          Exit"
        .to_string()
}
