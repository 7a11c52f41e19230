use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; }
.layout { display: grid; grid-template-columns: 16rem 1.2fr 1fr; gap: 2rem; padding: 1.5rem; }
textarea { width: 100%; height: 30rem; }
button[type=submit] { width: 100%; padding: .6rem; margin-top: .5rem; }
.notice { padding: .6rem .8rem; border-radius: .3rem; margin: .5rem 0; }
.info { background: #e7f1fb; }
.warning { background: #fff5d6; }
.error { background: #fde4e4; }
.success { background: #e3f6e8; }
.mcq { border-bottom: 1px solid #ddd; padding-bottom: .8rem; margin-bottom: .8rem; }
.mcq fieldset { border: none; padding: 0; }
"#;

fn header() -> Markup {
    html! {
        header {
            h1 { "MCQ Generator from Text" }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (header())
                main { (body) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wraps_body_and_title() {
        let rendered = page("MCQ Generator", html! { p { "hello" } }).into_string();

        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("<title>MCQ Generator</title>"));
        assert!(rendered.contains("<p>hello</p>"));
    }
}
