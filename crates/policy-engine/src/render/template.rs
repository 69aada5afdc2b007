//! Slot-based section layout for the simplified summary
//!
//! A slot prints what was extracted for it; when nothing was, it prints its
//! fallback lines; when there are none of those either, it prints nothing.

use super::line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `- Label: first value`
    Inline,
    /// `- Label:` followed by one `  * item` line per value
    Bulleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub label: &'static str,
    pub layout: Layout,
    pub extracted: Vec<String>,
    pub fallback: Vec<String>,
}

impl Slot {
    pub fn inline(label: &'static str) -> Self {
        Self {
            label,
            layout: Layout::Inline,
            extracted: Vec::new(),
            fallback: Vec::new(),
        }
    }

    pub fn bulleted(label: &'static str) -> Self {
        Self {
            layout: Layout::Bulleted,
            ..Self::inline(label)
        }
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extracted = values
            .into_iter()
            .map(Into::into)
            .map(|v: String| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        self
    }

    pub fn or_else(mut self, fallback: &[&str]) -> Self {
        self.fallback = fallback.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Fixed content that never depends on extraction
    pub fn fixed(label: &'static str, layout: Layout, lines: &[&str]) -> Self {
        Self {
            layout,
            ..Self::inline(label)
        }
        .or_else(lines)
    }

    fn lines(&self) -> &[String] {
        if self.extracted.is_empty() {
            &self.fallback
        } else {
            &self.extracted
        }
    }

    pub fn render(&self, out: &mut String) {
        let lines = self.lines();
        let Some(first) = lines.first() else {
            return;
        };
        match self.layout {
            Layout::Inline => line(out, &format!("- {}: {}", self.label, first)),
            Layout::Bulleted => {
                line(out, &format!("- {}:", self.label));
                for item in lines {
                    line(out, &format!("  * {}", item));
                }
            }
        }
    }
}

/// A numbered summary section: heading, dashed underline, slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTemplate {
    pub title: &'static str,
    pub underline: usize,
    pub slots: Vec<Slot>,
}

impl SectionTemplate {
    pub fn new(title: &'static str, underline: usize) -> Self {
        Self {
            title,
            underline,
            slots: Vec::new(),
        }
    }

    pub fn slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn render(&self, number: usize, out: &mut String) {
        line(out, &format!("{}. {}", number, self.title));
        line(out, &"-".repeat(self.underline));
        for slot in &self.slots {
            slot.render(out);
        }
    }
}
