use spectrum_core::models::color::ColorType;
use spectrum_core::models::personality::PersonalityType;
use spectrum_core::models::result::QuizResult;
use spectrum_core::models::scores::ScoreVector;
use spectrum_export::error::ExportError;
use spectrum_export::render::{render_default, render_report};
use spectrum_export::report::ReportContext;
use uuid::Uuid;

fn result(unconscious: Option<ScoreVector>) -> QuizResult {
    QuizResult {
        id: Uuid::new_v4(),
        user_id: None,
        scores: ScoreVector {
            fiery_red: 33,
            sunshine_yellow: 20,
            earth_green: 28,
            cool_blue: 20,
        },
        unconscious_scores: unconscious,
        dominant_color: ColorType::FieryRed,
        secondary_color: ColorType::EarthGreen,
        personality_type: PersonalityType::Director,
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn context_joins_catalog_and_dynamics() {
    let ctx = ReportContext::build(&result(None));
    assert_eq!(ctx.personality.personality_type, PersonalityType::Director);
    assert_eq!(ctx.dominant.name, "Fiery Red");
    assert_eq!(ctx.secondary.name, "Earth Green");
    assert_eq!(ctx.colors.len(), 4);
    assert_eq!(ctx.colors[0].score, 33);
    assert_eq!(ctx.colors[0].flow, 13);
    assert_eq!(ctx.preference_flow.value, 13);
    assert!(!ctx.unconscious_scores);
    assert!(ctx.dynamics.unconscious.is_none());
}

#[test]
fn default_template_renders_profile() {
    let r = result(None);
    let report = render_default(&ReportContext::build(&r)).unwrap();

    assert!(report.starts_with("# Director"));
    assert!(report.contains(&r.id.to_string()));
    assert!(report.contains("**Fiery Red**"));
    assert!(report.contains("| Fiery Red | 33% | 1.98 |"));
    assert!(report.contains("| Cool Blue | 20% | 1.2 |"));
    assert!(report.contains("Preference flow: 13"));
    assert!(!report.contains("Unconscious profile"));
    assert!(report.contains("- decisive"));
}

#[test]
fn default_template_includes_unconscious_scores() {
    let unconscious = ScoreVector {
        fiery_red: 10,
        sunshine_yellow: 10,
        earth_green: 20,
        cool_blue: 60,
    };
    let report = render_default(&ReportContext::build(&result(Some(unconscious)))).unwrap();
    assert!(report.contains("Unconscious profile: Fiery Red 10%"));
    assert!(report.contains("Cool Blue 60%"));
}

#[test]
fn custom_template() {
    let ctx = ReportContext::build(&result(None));
    let out = render_report("short", "{{ personality.name }}/{{ dominant.short_name }}", &ctx).unwrap();
    assert_eq!(out, "Director/Red");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let ctx = ReportContext::build(&result(None));
    let err = render_report("bad", "{% for %}", &ctx).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
