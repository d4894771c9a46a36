//! Terminal output: styled feed pages and machine-readable JSON.

pub mod formatting;
pub mod page;
pub mod views;

pub use formatting::{SentimentTone, format_relative_time};
pub use page::{FeedPage, FeedRow};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use serde::Serialize;
use std::io::Write;

use crate::error::AppError;
use crate::services::notifier::{Notice, NoticeLevel};

/// Writes `value` as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes notices one per line, colored by level
pub fn write_notices<W: Write>(out: &mut W, notices: &[Notice]) -> Result<(), AppError> {
    for notice in notices {
        let (marker, color) = match notice.level {
            NoticeLevel::Success => ("[ok]", Color::Green),
            NoticeLevel::Error => ("[error]", Color::Red),
        };
        queue!(
            out,
            SetForegroundColor(color),
            Print(marker),
            ResetColor,
            Print(format!(" {}\n", notice.message))
        )?;
    }
    out.flush()?;
    Ok(())
}
