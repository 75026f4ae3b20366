//! HTML for the single question page.

use html_escape::{encode_double_quoted_attribute, encode_text};
use pdf_qa_core::Answer;

pub const PAGE_TITLE: &str = "RAG-Based Question Answering System";
pub const EMPTY_QUERY_WARNING: &str = "Please enter a question.";

/// Document status shown at the top of every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Loaded { pages: usize },
    Halted { message: String },
}

/// What sits under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Prompt,
    EmptyQuery,
    Answered { query: String, answer: Answer },
}

pub fn render(banner: &Banner, outcome: &Outcome) -> String {
    let halted = matches!(banner, Banner::Halted { .. });
    let banner_html = match banner {
        Banner::Loaded { pages } => format!(
            r#"<div class="banner success">Loaded {pages} pages from PDF</div>"#
        ),
        Banner::Halted { message } => format!(
            r#"<div class="banner error">{}</div>"#,
            encode_text(message)
        ),
    };

    let query_value = match outcome {
        Outcome::Answered { query, .. } => encode_double_quoted_attribute(query).into_owned(),
        _ => String::new(),
    };

    let body = if halted {
        String::new()
    } else {
        let outcome_html = match outcome {
            Outcome::Prompt => String::new(),
            Outcome::EmptyQuery => format!(
                r#"<div class="banner warning">{EMPTY_QUERY_WARNING}</div>"#
            ),
            Outcome::Answered { answer, .. } => format!(
                r#"<section class="answer"><h2>Answer</h2><p>{}</p></section>"#,
                encode_text(answer.as_str())
            ),
        };

        format!(
            r#"<h2>Ask a question</h2>
    <form method="post" action="/ask">
        <label for="query">Enter your question:</label>
        <input id="query" name="query" type="text" value="{query_value}" autofocus>
        <button type="submit">Get Answer</button>
    </form>
    {outcome_html}"#
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>RAG QA System</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 760px;
            margin: 2rem auto;
            padding: 0 1rem;
            color: #1f2937;
        }}
        .banner {{
            border-radius: 8px;
            padding: 0.75rem 1rem;
            margin: 1rem 0;
        }}
        .success {{ background: #dcfce7; color: #166534; }}
        .warning {{ background: #fef9c3; color: #854d0e; }}
        .error {{ background: #fee2e2; color: #991b1b; }}
        input[type=text] {{ width: 100%; padding: 0.5rem; margin: 0.5rem 0; }}
        .answer p {{ white-space: pre-wrap; }}
    </style>
</head>
<body>
    <h1>{PAGE_TITLE}</h1>
    {banner_html}
    {body}
</body>
</html>"#
    )
}
