//! Java source rendering by `{{VAR}}` placeholder substitution.

use std::collections::HashMap;

use anvil_core::{
    application::ApplicationError,
    domain::{SourceBody, SourceFile},
    error::AnvilResult,
};

const STUB_TEMPLATE: &str = "package {{PACKAGE}};\n\npublic {{KIND}} {{TYPE_NAME}} {}\n";

const ENTRYPOINT_TEMPLATE: &str = "\
package {{PACKAGE}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{TYPE_NAME}} {

    public static void main(String[] args) {
        SpringApplication.run({{TYPE_NAME}}.class, args);
    }
}
";

/// Variables available to a source template.
///
/// | Variable | Example |
/// |----------|---------|
/// | `PACKAGE` | `com.example.domain.patient.model` |
/// | `TYPE_NAME` | `Patient` |
/// | `KIND` | `abstract class` (stubs only) |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for one source file.
    pub fn for_source(source: &SourceFile) -> Self {
        let ctx = Self::new()
            .with_variable("PACKAGE", source.package.to_string())
            .with_variable("TYPE_NAME", source.type_name.as_str());
        match source.body {
            SourceBody::Stub(kind) => ctx.with_variable("KIND", kind.keyword()),
            SourceBody::Entrypoint => ctx,
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every known `{{VARIABLE}}`; unknown placeholders stay as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Like [`render`](Self::render), but fails on a leftover placeholder.
    pub fn render_strict(&self, template: &str) -> AnvilResult<String> {
        let rendered = self.render(template);
        if let Some(start) = rendered.find("{{") {
            let name: String = rendered[start + 2..]
                .chars()
                .take_while(|c| *c != '}')
                .collect();
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unresolved placeholder '{name}'"),
            }
            .into());
        }
        Ok(rendered)
    }
}

/// Render a Java source file.
pub fn render_source(source: &SourceFile) -> AnvilResult<String> {
    let template = match source.body {
        SourceBody::Stub(_) => STUB_TEMPLATE,
        SourceBody::Entrypoint => ENTRYPOINT_TEMPLATE,
    };
    RenderContext::for_source(source).render_strict(template)
}
