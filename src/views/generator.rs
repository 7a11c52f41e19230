use maud::{html, Markup};

use crate::{
    config::{EXPECTED_OPTION_COUNT, MAX_QUESTIONS, MIN_QUESTIONS},
    models::domain::{option_label, McqRecord},
    services::generation_service::GenerationOutcome,
    views::layout,
};

pub const PAGE_TITLE: &str = "MCQ Generator";

/// What the right-hand column shows after a request.
pub enum ResultsPanel<'a> {
    Empty,
    Warning(&'a str),
    Error(&'a str),
    Generated(&'a GenerationOutcome),
}

fn how_to_use(question_count: u8) -> Markup {
    html! {
        aside {
            h2 { "How to use" }
            ol {
                li { "Paste any text (e.g., an article, a chapter summary) into the text box." }
                li { "Select the number of questions you want to generate." }
                li { "Click the " strong { "\"Generate MCQs\"" } " button." }
                li { "The AI will read the text and create questions with options and answers." }
                li { "Review the generated questions!" }
            }
            hr;
            label for="question_count" { "Number of questions to generate:" }
            input type="number" id="question_count" name="question_count" form="generator"
                min=(MIN_QUESTIONS) max=(MAX_QUESTIONS) value=(question_count);
        }
    }
}

fn source_form(text: &str) -> Markup {
    html! {
        section {
            h2 { "Paste your text here:" }
            form id="generator" method="post" action="/generate" {
                textarea name="text" aria-label="Source Text" { (text) }
                button type="submit" { "Generate MCQs" }
            }
        }
    }
}

fn mcq_entry(number: usize, record: &McqRecord) -> Markup {
    html! {
        article.mcq {
            h3 { strong { "Q" (number) ": " (record.question) } }
            @if record.has_expected_shape(EXPECTED_OPTION_COUNT) {
                fieldset disabled {
                    @for (idx, option) in record.options.iter().enumerate() {
                        label {
                            input type="radio" name=(format!("mcq_{}", number)) value=(idx);
                            " " (option_label(idx)) ") " (option)
                        }
                        br;
                    }
                }
                details {
                    summary { "Show Answer" }
                    p.notice.success {
                        "Correct Answer: "
                        (record.correct_option().unwrap_or(record.answer.as_str()))
                    }
                }
            } @else {
                p.notice.warning {
                    "Q" (number) " did not return " (EXPECTED_OPTION_COUNT) " options. Skipping."
                }
            }
        }
    }
}

fn results(panel: &ResultsPanel) -> Markup {
    html! {
        section id="results" {
            h2 { "Generated MCQs" }
            @match panel {
                ResultsPanel::Empty => {
                    p.notice.info { "Click the 'Generate MCQs' button to see your questions here." }
                }
                ResultsPanel::Warning(message) => {
                    p.notice.warning { (message) }
                }
                ResultsPanel::Error(message) => {
                    p.notice.error role="alert" { (message) }
                }
                ResultsPanel::Generated(outcome) => {
                    @for warning in &outcome.warnings {
                        p.notice.warning { (warning) }
                    }
                    @if outcome.records.is_empty() {
                        p.notice.info { "Click the 'Generate MCQs' button to see your questions here." }
                    }
                    @for (idx, record) in outcome.records.iter().enumerate() {
                        (mcq_entry(idx + 1, record))
                    }
                }
            }
        }
    }
}

pub fn generator_page(text: &str, question_count: u8, panel: ResultsPanel) -> Markup {
    layout::page(
        PAGE_TITLE,
        html! {
            div.layout {
                (how_to_use(question_count))
                (source_form(text))
                (results(&panel))
            }
        },
    )
}
