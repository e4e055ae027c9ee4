use crate::ir::GenerationContext;

pub const SCAFFOLD_LINE: &str = "app = typer.Typer()";
pub const COMMAND_DECORATOR: &str = "@app.command()";
pub const FUNCTION_OPEN: &str = "def main(";
pub const FUNCTION_CLOSE: &str = "):";
pub const CAPTURE_BODY: &str = "\targs = dict(locals())";
pub const NOOP_BODY: &str = "\tpass";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    pub create_app: bool,
    pub get_args: bool,
    pub tab_width: usize,
}

/// Generated source, one entry per line without terminators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedDocument {
    pub lines: Vec<String>,
}

impl GeneratedDocument {
    pub fn render(&self) -> String {
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

pub fn compose(context: &GenerationContext, options: &ComposeOptions) -> GeneratedDocument {
    let mut lines = Vec::new();

    for key in &context.imports {
        lines.push(key.line().to_string());
    }
    if !context.imports.is_empty() {
        lines.push(String::new());
    }

    if options.create_app {
        lines.push(SCAFFOLD_LINE.to_string());
        lines.push(String::new());
    }

    for block in &context.enum_blocks {
        lines.extend(block.lines.iter().cloned());
        lines.push(String::new());
    }

    lines.push(COMMAND_DECORATOR.to_string());
    lines.push(FUNCTION_OPEN.to_string());
    lines.extend(context.declaration_lines.iter().cloned());
    lines.push(FUNCTION_CLOSE.to_string());
    let body = if options.get_args {
        CAPTURE_BODY
    } else {
        NOOP_BODY
    };
    lines.push(body.to_string());

    GeneratedDocument {
        lines: expand_tabs(lines, options.tab_width),
    }
}

fn expand_tabs(lines: Vec<String>, tab_width: usize) -> Vec<String> {
    let indent = " ".repeat(tab_width);
    lines
        .into_iter()
        .map(|line| line.replace('\t', &indent))
        .collect()
}
