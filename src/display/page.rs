// src/display/page.rs - Styled text page written to any terminal-like writer

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use std::io::Write;

use crate::error::AppError;

const TITLE_BG: Color = Color::Green;
const HEADER_BG: Color = Color::Blue;
const HEADER_FG: Color = Color::White;
const SUBHEADER_FG: Color = Color::Green;
const HEADING_FG: Color = Color::Cyan;
const TEXT_FG: Color = Color::White;
const MUTED_FG: Color = Color::DarkGrey;
const ERROR_FG: Color = Color::Red;
pub const PAGE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedRow {
    Heading(String),
    Text { text: String, color: Color },
    Muted(String),
    KeyValue { label: String, value: String, color: Color },
    Error(String),
    Blank,
}

/// A titled page of rows, rendered top to bottom without cursor movement so
/// the output stays in terminal history.
#[derive(Debug, Clone)]
pub struct FeedPage {
    title: String,
    subheader: String,
    rows: Vec<FeedRow>,
}

impl FeedPage {
    pub fn new(title: impl Into<String>, subheader: impl Into<String>) -> Self {
        FeedPage {
            title: title.into(),
            subheader: subheader.into(),
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[FeedRow] {
        &self.rows
    }

    pub fn add_heading(&mut self, heading: impl Into<String>) {
        self.rows.push(FeedRow::Heading(heading.into()));
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.add_colored_text(text, TEXT_FG);
    }

    pub fn add_colored_text(&mut self, text: impl Into<String>, color: Color) {
        self.rows.push(FeedRow::Text {
            text: text.into(),
            color,
        });
    }

    pub fn add_muted(&mut self, text: impl Into<String>) {
        self.rows.push(FeedRow::Muted(text.into()));
    }

    pub fn add_key_value(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.add_colored_key_value(label, value, TEXT_FG);
    }

    pub fn add_colored_key_value(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        color: Color,
    ) {
        self.rows.push(FeedRow::KeyValue {
            label: label.into(),
            value: value.into(),
            color,
        });
    }

    pub fn add_error_message(&mut self, message: &str) {
        self.rows.push(FeedRow::Error(message.to_string()));
    }

    pub fn add_blank(&mut self) {
        self.rows.push(FeedRow::Blank);
    }

    /// Plain text of the page without any styling, one row per line
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), self.subheader.clone()];
        lines.extend(self.rows.iter().map(|row| match row {
            FeedRow::Heading(text) | FeedRow::Muted(text) => text.clone(),
            FeedRow::Text { text, .. } => text.clone(),
            FeedRow::KeyValue { label, value, .. } => {
                format!("{label:<LABEL_WIDTH$}{value}")
            }
            FeedRow::Error(message) => message.clone(),
            FeedRow::Blank => String::new(),
        }));
        lines
    }

    /// Queues the styled page into `out` and flushes it
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let title_width = PAGE_WIDTH / 2;
        queue!(
            out,
            SetBackgroundColor(TITLE_BG),
            SetForegroundColor(HEADER_FG),
            Print(format!("{:<title_width$}", self.title)),
            SetBackgroundColor(HEADER_BG),
            Print(format!("{:>title_width$}", env!("CARGO_PKG_NAME"))),
            ResetColor,
            Print("\n"),
            SetForegroundColor(SUBHEADER_FG),
            Print(format!("{:<PAGE_WIDTH$}", self.subheader)),
            ResetColor,
            Print("\n\n")
        )?;

        for row in &self.rows {
            match row {
                FeedRow::Heading(text) => queue!(
                    out,
                    SetForegroundColor(HEADING_FG),
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    ResetColor,
                    Print("\n")
                )?,
                FeedRow::Text { text, color } => queue!(
                    out,
                    SetForegroundColor(*color),
                    Print(text),
                    ResetColor,
                    Print("\n")
                )?,
                FeedRow::Muted(text) => queue!(
                    out,
                    SetForegroundColor(MUTED_FG),
                    Print(text),
                    ResetColor,
                    Print("\n")
                )?,
                FeedRow::KeyValue {
                    label,
                    value,
                    color,
                } => queue!(
                    out,
                    SetForegroundColor(TEXT_FG),
                    Print(format!("{label:<LABEL_WIDTH$}")),
                    SetForegroundColor(*color),
                    Print(value),
                    ResetColor,
                    Print("\n")
                )?,
                FeedRow::Error(message) => queue!(
                    out,
                    SetForegroundColor(ERROR_FG),
                    Print(message),
                    ResetColor,
                    Print("\n")
                )?,
                FeedRow::Blank => queue!(out, Print("\n"))?,
            }
        }

        out.flush()?;
        Ok(())
    }
}
