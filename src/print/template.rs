//! Header/footer format strings
//!
//! A format mixes literal text with `$variable` references. `$$` stands for
//! a literal dollar sign, and a `$` that starts no known variable is kept as
//! is. Braces have no special meaning.

use chrono::{DateTime, Local};
use nom::{
    bytes::complete::{tag, take_till1},
    IResult,
};

/// Variables recognised in header/footer formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    PageNumber,
    PageCount,
    PlanScale,
    Date,
    Time,
    HomePresentationName,
    HomeName,
    LevelName,
}

impl Variable {
    pub const ALL: [Variable; 8] = [
        Variable::PageNumber,
        Variable::PageCount,
        Variable::PlanScale,
        Variable::Date,
        Variable::Time,
        Variable::HomePresentationName,
        Variable::HomeName,
        Variable::LevelName,
    ];

    /// Text of the variable in a format string
    pub fn token(&self) -> &'static str {
        match self {
            Variable::PageNumber => "$pageNumber",
            Variable::PageCount => "$pageCount",
            Variable::PlanScale => "$planScale",
            Variable::Date => "$date",
            Variable::Time => "$time",
            Variable::HomePresentationName => "$name",
            Variable::HomeName => "$file",
            Variable::LevelName => "$level",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Variable(Variable),
}

/// Parsed header/footer format
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

/// Values substituted into a template for one page
#[derive(Debug, Clone)]
pub struct VariableValues<'a> {
    /// 1-based
    pub page_number: usize,
    pub page_count: usize,
    pub plan_scale: Option<f32>,
    pub date: DateTime<Local>,
    pub date_format: &'a str,
    pub time_format: &'a str,
    pub presentation_name: Option<&'a str>,
    pub home_name: Option<&'a str>,
    pub level_name: Option<&'a str>,
}

fn variable(input: &str) -> IResult<&str, Variable> {
    for candidate in Variable::ALL {
        let matched: IResult<&str, &str> = tag(candidate.token())(input);
        if let Ok((rest, _)) = matched {
            return Ok((rest, candidate));
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Tag,
    )))
}

fn literal(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == '$')(input)
}

impl Template {
    pub fn parse(format: &str) -> Self {
        let mut segments = Vec::new();
        let mut buffer = String::new();
        let mut remaining = format;

        while !remaining.is_empty() {
            if let Ok((rest, text)) = literal(remaining) {
                buffer.push_str(text);
                remaining = rest;
                continue;
            }

            if let Some(rest) = remaining.strip_prefix("$$") {
                buffer.push('$');
                remaining = rest;
                continue;
            }

            match variable(remaining) {
                Ok((rest, var)) => {
                    if !buffer.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut buffer)));
                    }
                    segments.push(Segment::Variable(var));
                    remaining = rest;
                }
                Err(_) => {
                    buffer.push('$');
                    remaining = &remaining[1..];
                }
            }
        }

        if !buffer.is_empty() {
            segments.push(Segment::Literal(buffer));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn uses(&self, var: Variable) -> bool {
        self.segments.contains(&Segment::Variable(var))
    }

    pub fn render(&self, values: &VariableValues<'_>) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Variable(var) => output.push_str(&values.value_of(*var)),
            }
        }
        output
    }
}

impl VariableValues<'_> {
    fn value_of(&self, var: Variable) -> String {
        match var {
            Variable::PageNumber => self.page_number.to_string(),
            Variable::PageCount => self.page_count.to_string(),
            Variable::PlanScale => self.plan_scale.map(format_scale).unwrap_or_default(),
            Variable::Date => self.date.format(self.date_format).to_string(),
            Variable::Time => self.date.format(self.time_format).to_string(),
            Variable::HomePresentationName => {
                self.presentation_name.unwrap_or_default().to_string()
            }
            Variable::HomeName => self.home_name.unwrap_or_default().to_string(),
            Variable::LevelName => self.level_name.unwrap_or_default().to_string(),
        }
    }
}

/// Format a plan scale as `1/N`
pub fn format_scale(scale: f32) -> String {
    if scale <= 0.0 || !scale.is_finite() {
        return String::new();
    }
    format!("1/{}", (1.0 / scale).round() as u64)
}
