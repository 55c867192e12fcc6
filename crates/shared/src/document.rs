use crate::models::SummarizeResponse;

pub const ARTICLES_HEADING: &str = "📰 Article Summaries:";
pub const CONSOLIDATED_HEADING: &str = "🧠 Consolidated Summary:";

/// Fixed glyph prefixed to every article summary paragraph.
pub const SUMMARY_GLYPH: &str = "📝 ";

/// Generic message rendered when a summarize request fails.
pub const FETCH_ERROR_MESSAGE: &str = "Error: Unable to fetch summary. Please try again.";

/// One rendered block. Title blocks carry their link target separately; only
/// the visible text participates in the exported summary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title {
        number: usize,
        title: String,
        link: String,
    },
    Text(String),
}

impl Block {
    pub fn text(&self) -> String {
        match self {
            Block::Title { number, title, .. } => format!("{}. {}", number, title),
            Block::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

impl Section {
    fn clear(&mut self) {
        self.heading = None;
        self.blocks.clear();
    }
}

/// Rendered output of the latest request: the per-article section followed by
/// the consolidated section. Owned by one session; cleared at the start of
/// every request.
///
/// Outcomes are tagged with the generation handed out by `begin_request`;
/// anything older than the latest generation is dropped, so a slow response
/// can never overwrite the output of a newer request.
#[derive(Debug, Default)]
pub struct SummaryDocument {
    articles: Section,
    consolidated: Section,
    generation: u64,
    exports_enabled: bool,
}

impl SummaryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &Section {
        &self.articles
    }

    pub fn consolidated(&self) -> &Section {
        &self.consolidated
    }

    /// Exports become available on the first successful render and stay
    /// available for the rest of the session.
    pub fn exports_enabled(&self) -> bool {
        self.exports_enabled
    }

    /// Start a new request cycle: wipe both sections and return the
    /// generation the eventual outcome must present to be rendered.
    pub fn begin_request(&mut self) -> u64 {
        self.articles.clear();
        self.consolidated.clear();
        self.generation += 1;
        self.generation
    }

    /// Render a successful response. Returns false (and leaves the document
    /// untouched) when `generation` is stale.
    pub fn apply_response(&mut self, generation: u64, response: &SummarizeResponse) -> bool {
        if generation != self.generation {
            return false;
        }

        self.articles.heading = Some(ARTICLES_HEADING.to_string());
        for (i, article) in response.article_summaries.iter().enumerate() {
            self.articles.blocks.push(Block::Title {
                number: i + 1,
                title: article.title.clone(),
                link: article.link.clone(),
            });
            self.articles
                .blocks
                .push(Block::Text(format!("{}{}", SUMMARY_GLYPH, article.summary)));
        }

        self.consolidated.heading = Some(CONSOLIDATED_HEADING.to_string());
        self.consolidated
            .blocks
            .push(Block::Text(response.consolidated_summary.clone()));

        self.exports_enabled = true;
        true
    }

    /// Render a failed request: the article section is replaced by a single
    /// error paragraph. The consolidated section and export availability keep
    /// whatever state they had. Stale generations are dropped.
    pub fn apply_error(&mut self, generation: u64, message: &str) -> bool {
        if generation != self.generation {
            return false;
        }

        self.articles.clear();
        self.articles.blocks.push(Block::Text(message.to_string()));
        true
    }

    /// Text of every block in document order (articles first, then the
    /// consolidated summary), joined with a blank line. Headings and link
    /// targets are not part of the exported text.
    pub fn all_summary_text(&self) -> String {
        self.articles
            .blocks
            .iter()
            .chain(self.consolidated.blocks.iter())
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// HTML rendition of the current document. Every response-provided string
    /// is escaped; backend content is never interpreted as markup.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str("  <title>Topic Summary</title>\n");
        html.push_str("  <style>\n");
        html.push_str("    body { font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 0 20px; line-height: 1.6; }\n");
        html.push_str("    h3 { color: #2c3e50; }\n");
        html.push_str("    a { color: #3498db; text-decoration: none; }\n");
        html.push_str("    a:hover { text-decoration: underline; }\n");
        html.push_str("  </style>\n");
        html.push_str("</head>\n<body>\n");

        for section in [&self.articles, &self.consolidated] {
            if let Some(heading) = &section.heading {
                html.push_str(&format!("<h3>{}</h3>\n", escape_html(heading)));
            }
            for block in &section.blocks {
                match block {
                    Block::Title {
                        number,
                        title,
                        link,
                    } => {
                        html.push_str(&format!(
                            "<p><strong>{}. <a href=\"{}\" target=\"_blank\">{}</a></strong></p>\n",
                            number,
                            escape_html(link),
                            escape_html(title)
                        ));
                    }
                    Block::Text(text) => {
                        html.push_str(&format!("<p>{}</p>\n", escape_html(text)));
                    }
                }
            }
        }

        html.push_str("</body>\n</html>");
        html
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
