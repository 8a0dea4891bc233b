use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::commands::ago::AgoResult;
use crate::commands::domain::DomainResult;
use crate::commands::referrer::ReferrerResult;
use crate::commands::truncate::TruncateResult;
use crate::models::StoryRow;

const PREVIEW_WIDTH: usize = 72;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    pub fn domain(&self, result: &DomainResult) -> Result<()> {
        if self.json {
            return self.print_json(result);
        }

        self.term.write_line(&result.domain)?;
        Ok(())
    }

    pub fn referrer(&self, result: &ReferrerResult) -> Result<()> {
        if self.json {
            return self.print_json(result);
        }

        self.term.write_line(&result.tagged)?;
        Ok(())
    }

    pub fn truncated(&self, result: &TruncateResult) -> Result<()> {
        if self.json {
            return self.print_json(result);
        }

        self.term.write_line(&result.text)?;
        Ok(())
    }

    pub fn ago(&self, result: &AgoResult) -> Result<()> {
        if self.json {
            return self.print_json(result);
        }

        self.term.write_line(&result.ago)?;
        Ok(())
    }

    pub fn rows(&self, rows: &[StoryRow]) -> Result<()> {
        if self.json {
            return self.print_json(rows);
        }

        if rows.is_empty() {
            self.term.write_line("No stories.")?;
            return Ok(());
        }

        for row in rows {
            self.print_row(row)?;
            self.term.write_line("")?;
        }
        Ok(())
    }

    fn print_row(&self, row: &StoryRow) -> Result<()> {
        self.term.write_line(&format!(
            "{} {}",
            style(&row.title).bold(),
            style(format!("({})", row.domain)).dim()
        ))?;

        let mut meta = format!("  {} ago by {}", row.age, style(&row.submitter).cyan());
        if row.sponsored {
            meta.push_str(&format!(" • {}", style("(sponsored)").yellow()));
            if let Some(price) = &row.price_eth {
                meta.push_str(&format!(" • Price: {price} ETH"));
            }
        }
        self.term.write_line(&meta)?;

        self.term
            .write_line(&format!("  Outbound: {}", row.outbound))?;
        self.term
            .write_line(&format!("  Story: {}", row.story_path))?;
        if let Some(image) = &row.image {
            self.term.write_line(&format!("  Image: {image}"))?;
        }

        if let Some(preview) = &row.comment_preview {
            self.term
                .write_line(&format!("  {}:", style(&preview.author).bold()))?;
            let wrapped = textwrap::fill(&preview.text, PREVIEW_WIDTH);
            self.term
                .write_line(&textwrap::indent(&wrapped, "    "))?;
        }
        Ok(())
    }
}
