mod line;
mod route;
mod station;

pub use line::*;
pub use route::*;
pub use station::*;

/// Plain text form of a command result; `--json` prints the serde form instead.
pub trait Render {
    fn render(&self) -> String;
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        self.iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn indented<I, S>(items: I, empty: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = items
        .into_iter()
        .map(|item| format!("  {}", item.as_ref()))
        .collect();
    if lines.is_empty() {
        format!("  ({empty})")
    } else {
        lines.join("\n")
    }
}
