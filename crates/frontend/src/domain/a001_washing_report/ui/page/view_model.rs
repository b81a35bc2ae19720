use super::model;
use crate::app::RegistryContext;
use contracts::domain::a001_washing_report::{
    validate_required, FieldIssue, FieldValue, FormState, StoredReport, SubmissionPayload,
};
use contracts::enums::report_type::ReportType;
use contracts::shared::report_types::{initial_form_data_for_today, ConfigLookup};
use leptos::prelude::*;

const RECENT_LIMIT: u64 = 5;

fn same_shape(current: &FieldValue, default: &FieldValue) -> bool {
    match (current, default) {
        (FieldValue::Text(_), FieldValue::Text(_)) => true,
        (FieldValue::List(_), FieldValue::List(_)) => true,
        (FieldValue::Table(a), FieldValue::Table(b)) => a.kind() == b.kind(),
        _ => false,
    }
}

/// Switch `state` to the report type of `defaults`. Entered values are kept;
/// fields the new type lacks, or holds in another shape, take the defaults.
pub fn switch_with_defaults(state: &mut FormState, defaults: &FormState) {
    state.switch_report_type(defaults.report_type());
    for name in defaults.field_names() {
        let Some(default) = defaults.get(name) else {
            continue;
        };
        let keep = state
            .get(name)
            .is_some_and(|current| same_shape(current, default));
        if !keep {
            state.insert(name, default.clone());
        }
    }
}

/// "Please fill in: A, B"
pub fn issues_message(issues: &[FieldIssue]) -> String {
    format!(
        "Please fill in: {}",
        issues
            .iter()
            .map(|issue| issue.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// ViewModel for the washing report page
#[derive(Clone)]
pub struct WashingReportViewModel {
    pub form: RwSignal<FormState>,
    pub error: RwSignal<Option<String>>,
    pub issues: RwSignal<Vec<FieldIssue>>,
    pub saving: RwSignal<bool>,
    /// Id of the last stored report
    pub saved_id: RwSignal<Option<String>>,
    pub recent: RwSignal<Vec<StoredReport>>,
    registry: RegistryContext,
}

impl WashingReportViewModel {
    pub fn new(registry: RegistryContext) -> Self {
        let initial = initial_form_data_for_today(&registry, registry.default_type());
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            issues: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            saved_id: RwSignal::new(None),
            recent: RwSignal::new(Vec::new()),
            registry,
        }
    }

    pub fn report_type(&self) -> ReportType {
        self.form.with(|state| state.report_type())
    }

    /// (code, label) pairs for the type selector
    pub fn report_type_options(&self) -> Vec<(String, String)> {
        self.registry
            .report_type_options()
            .map(|option| (option.value.code().to_string(), option.label))
            .collect()
    }

    pub fn description(&self) -> &'static str {
        self.registry
            .get(self.report_type())
            .unwrap_or_else(|| self.registry.default_config())
            .description
    }

    /// Selector change handler; `key` is a type code or display name
    pub fn select_report_type(&self, key: &str) {
        let report_type = match self.registry.lookup(key) {
            Ok(ConfigLookup::Found(config)) => config.report_type,
            Ok(ConfigLookup::Defaulted { requested, config }) => {
                log::warn!("Unknown report type '{}', using '{}'", requested, config.label);
                config.report_type
            }
            Err(e) => {
                log::warn!("{}", e);
                self.error.set(Some(e.to_string()));
                return;
            }
        };
        if report_type == self.report_type() {
            return;
        }

        let defaults = initial_form_data_for_today(&self.registry, report_type);
        self.form
            .update(|state| switch_with_defaults(state, &defaults));
        self.error.set(None);
        self.issues.set(Vec::new());
        self.load_recent();
    }

    /// Start over with the defaults of the current report type
    pub fn reset(&self) {
        self.form.set(initial_form_data_for_today(
            &self.registry,
            self.report_type(),
        ));
        self.error.set(None);
        self.issues.set(Vec::new());
    }

    /// Validate and submit the report
    pub fn submit_command(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let state = self.form.get_untracked();
        let config = self
            .registry
            .get(state.report_type())
            .unwrap_or_else(|| self.registry.default_config());

        if let Err(issues) = validate_required(config, &state) {
            self.error.set(Some(issues_message(&issues)));
            self.issues.set(issues);
            return;
        }
        self.issues.set(Vec::new());

        let payload = match SubmissionPayload::from_form_state(&state, None) {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(format!("Failed to build report: {}", e)));
                return;
            }
        };

        let vm = self.clone();
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::submit_report(&payload).await {
                Ok(response) if response.success => {
                    log::info!("Report saved: {:?}", response.id);
                    vm.saved_id.set(response.id);
                    vm.reset();
                    vm.load_recent();
                }
                Ok(response) => {
                    vm.error.set(Some(response.message));
                    vm.issues.set(response.issues);
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.saving.set(false);
        });
    }

    /// Refresh the recent-reports list for the current type
    pub fn load_recent(&self) {
        let recent = self.recent;
        let report_type = self.report_type();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_recent(report_type, RECENT_LIMIT).await {
                Ok(page) => recent.set(page.items),
                Err(e) => {
                    log::warn!("Failed to load recent reports: {}", e);
                    recent.set(Vec::new());
                }
            }
        });
    }
}
