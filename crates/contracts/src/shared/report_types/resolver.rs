//! Form resolver: picks the renderer to mount for a report type

use crate::enums::report_type::ReportType;

use super::config::{FormComponent, ReportTypeConfig};
use super::registry::ReportTypeRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRenderer {
    /// Field-driven form that walks the config's field list
    Generic,
    Specialized(FormComponent),
}

/// Why a specialized form was requested but the generic one was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFallback {
    /// `use_default_form` is off but no component is named
    MissingComponent,
    /// The named component is not one this build knows
    UnknownComponent(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResolution {
    pub renderer: FormRenderer,
    pub fallback: Option<FormFallback>,
}

impl FormResolution {
    fn generic(fallback: Option<FormFallback>) -> Self {
        Self {
            renderer: FormRenderer::Generic,
            fallback,
        }
    }
}

pub fn resolve_form(config: &ReportTypeConfig) -> FormResolution {
    match (config.use_default_form, config.form_component) {
        (true, _) => FormResolution::generic(None),
        (false, Some(component)) => FormResolution {
            renderer: FormRenderer::Specialized(component),
            fallback: None,
        },
        (false, None) => FormResolution::generic(Some(FormFallback::MissingComponent)),
    }
}

/// Resolve a config whose component arrives as a name (e.g. a config DTO).
/// Names that do not match a known component fall back to the generic form.
pub fn resolve_form_by_name(use_default_form: bool, form_component: Option<&str>) -> FormResolution {
    if use_default_form {
        return FormResolution::generic(None);
    }
    match form_component {
        None => FormResolution::generic(Some(FormFallback::MissingComponent)),
        Some(name) => match FormComponent::from_name(name) {
            Some(component) => FormResolution {
                renderer: FormRenderer::Specialized(component),
                fallback: None,
            },
            None => FormResolution::generic(Some(FormFallback::UnknownComponent(name.to_string()))),
        },
    }
}

/// Resolve the renderer for a form state's report type; no type means the
/// registry default.
pub fn resolve_for_report_type(
    registry: &ReportTypeRegistry,
    report_type: Option<ReportType>,
) -> FormResolution {
    let report_type = report_type.unwrap_or_else(|| registry.default_type());
    let config = registry
        .get(report_type)
        .unwrap_or_else(|| registry.default_config());
    resolve_form(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_name_falls_back_to_generic() {
        let resolution = resolve_form_by_name(false, Some("Ghost"));
        assert_eq!(resolution.renderer, FormRenderer::Generic);
        assert_eq!(
            resolution.fallback,
            Some(FormFallback::UnknownComponent("Ghost".to_string()))
        );
    }

    #[test]
    fn test_registered_name_mounts_component() {
        let resolution = resolve_form_by_name(false, Some("HTTestingForm"));
        assert_eq!(
            resolution.renderer,
            FormRenderer::Specialized(FormComponent::HtTestingForm)
        );
        assert_eq!(resolution.fallback, None);
    }

    #[test]
    fn test_default_form_flag_wins() {
        let resolution = resolve_form_by_name(true, Some("HTTestingForm"));
        assert_eq!(resolution.renderer, FormRenderer::Generic);
        assert_eq!(resolution.fallback, None);

        let resolution = resolve_form_by_name(false, None);
        assert_eq!(resolution.renderer, FormRenderer::Generic);
        assert_eq!(resolution.fallback, Some(FormFallback::MissingComponent));
    }

    #[test]
    fn test_standard_types_resolve() {
        let registry = ReportTypeRegistry::standard().unwrap();
        let expect = [
            (ReportType::HomeWash, FormRenderer::Generic),
            (
                ReportType::GarmentWash,
                FormRenderer::Specialized(FormComponent::GarmentWashForm),
            ),
            (
                ReportType::HtTesting,
                FormRenderer::Specialized(FormComponent::HtTestingForm),
            ),
            (
                ReportType::EmbPrintingTesting,
                FormRenderer::Specialized(FormComponent::EmbTestingForm),
            ),
            (
                ReportType::PullingTest,
                FormRenderer::Specialized(FormComponent::PullingTestForm),
            ),
        ];
        for (report_type, renderer) in expect {
            let resolution = resolve_for_report_type(&registry, Some(report_type));
            assert_eq!(resolution.renderer, renderer, "{report_type}");
            assert_eq!(resolution.fallback, None);
        }

        assert_eq!(
            resolve_for_report_type(&registry, None).renderer,
            FormRenderer::Generic
        );
    }

    #[test]
    fn test_config_without_component() {
        let registry = ReportTypeRegistry::standard().unwrap();
        let mut config = registry.get(ReportType::HtTesting).unwrap().clone();
        config.form_component = None;
        let resolution = resolve_form(&config);
        assert_eq!(resolution.renderer, FormRenderer::Generic);
        assert_eq!(resolution.fallback, Some(FormFallback::MissingComponent));
    }
}
