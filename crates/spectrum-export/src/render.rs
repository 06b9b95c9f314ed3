use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::ReportContext;

/// Markdown report used when no custom template is supplied.
pub const DEFAULT_TEMPLATE: &str = r#"# {{ personality.name }}

Result {{ result.id }}, recorded {{ result.createdAt }}

{{ personality.description }}

Dominant energy: **{{ dominant.name }}**, supported by **{{ secondary.name }}**.

| Color | Score | Conscious | Less conscious | Flow |
|---|---|---|---|---|
{% for row in colors -%}
| {{ row.name }} | {{ row.score }}% | {{ row.conscious_value }} | {{ row.less_conscious_value }} | {{ row.flow }} |
{% endfor %}
Preference flow: {{ preference_flow.value }} (from {{ preference_flow.topColor }} to {{ preference_flow.bottomColor }})
{% if unconscious_scores %}
Unconscious profile: {% for row in colors %}{{ row.name }} {{ row.unconscious_score }}%{% if not loop.last %}, {% endif %}{% endfor %}
{% endif %}
## Strengths

{% for s in personality.strengths -%}
- {{ s }}
{% endfor %}
## Blind spots

{% for s in personality.blind_spots -%}
- {{ s }}
{% endfor %}"#;

/// Render a Tera template with a report context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The context fields become the template variables.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context to a Tera context via serde_json
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "rendered report");
    Ok(rendered)
}

pub fn render_default(context: &ReportContext) -> Result<String, ExportError> {
    render_report("default_report", DEFAULT_TEMPLATE, context)
}
