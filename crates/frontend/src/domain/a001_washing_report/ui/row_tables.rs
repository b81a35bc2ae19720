//! Editors for `custom` fields: one table component per `TableKind`.
//!
//! Cells read and write the form signal by row index, so typing into a cell
//! never re-creates the row's inputs.

use crate::shared::components::ui::{Button, Checkbox};
use contracts::domain::a001_washing_report::{
    ColorFastnessRow, ColorStainingRow, FormState, PassFail, PullingTestRow, ShrinkageRow,
    TableRows, Verdict, VisualAssessmentRow,
};
use contracts::shared::form_schema::{FieldDefinition, TableKind};
use leptos::prelude::*;

/// Typed access to the rows of one table kind
pub trait RowAccess: Sized + 'static {
    fn rows(table: &TableRows) -> Option<&Vec<Self>>;
    fn rows_mut(table: &mut TableRows) -> Option<&mut Vec<Self>>;
}

macro_rules! row_access {
    ($row:ty, $variant:ident) => {
        impl RowAccess for $row {
            fn rows(table: &TableRows) -> Option<&Vec<Self>> {
                match table {
                    TableRows::$variant(rows) => Some(rows),
                    _ => None,
                }
            }

            fn rows_mut(table: &mut TableRows) -> Option<&mut Vec<Self>> {
                match table {
                    TableRows::$variant(rows) => Some(rows),
                    _ => None,
                }
            }
        }
    };
}

row_access!(PullingTestRow, PullingTest);
row_access!(ColorFastnessRow, ColorFastness);
row_access!(ColorStainingRow, ColorStaining);
row_access!(VisualAssessmentRow, VisualAssessment);
row_access!(ShrinkageRow, Shrinkage);

fn row_count(form: RwSignal<FormState>, field: &'static str) -> usize {
    form.with(|state| state.table(field).map(TableRows::len).unwrap_or(0))
}

fn read_row<R: RowAccess, T: Default>(
    form: RwSignal<FormState>,
    field: &'static str,
    index: usize,
    read: fn(&R) -> T,
) -> T {
    form.with(|state| {
        state
            .table(field)
            .and_then(R::rows)
            .and_then(|rows| rows.get(index))
            .map(read)
            .unwrap_or_default()
    })
}

fn update_row<R: RowAccess>(
    form: RwSignal<FormState>,
    field: &'static str,
    index: usize,
    write: impl FnOnce(&mut R),
) {
    form.update(|state| {
        if let Some(row) = state
            .table_mut(field)
            .and_then(R::rows_mut)
            .and_then(|rows| rows.get_mut(index))
        {
            write(row);
        }
    });
}

fn add_row(form: RwSignal<FormState>, field: &'static str) {
    form.update(|state| {
        let colors = state.header_colors();
        match state.table_mut(field) {
            Some(table) => table.push_default_row(&colors),
            None => log::warn!("No row table '{}' in form state", field),
        }
    });
}

fn remove_row(form: RwSignal<FormState>, field: &'static str, index: usize) {
    form.update(|state| {
        if let Some(table) = state.table_mut(field) {
            if !table.remove_row(index) {
                log::debug!("Row {} of '{}' kept", index, field);
            }
        }
    });
}

fn parse_pass_fail(value: &str) -> PassFail {
    if value == PassFail::Fail.as_str() {
        PassFail::Fail
    } else {
        PassFail::Pass
    }
}

/// Text input cell of row `index`
#[component]
fn TextCell<R: RowAccess>(
    form: RwSignal<FormState>,
    field: &'static str,
    index: usize,
    read: fn(&R) -> String,
    write: fn(&mut R, String),
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <td>
            <input
                type="text"
                class="table__input"
                placeholder=placeholder
                prop:value=move || read_row(form, field, index, read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    update_row(form, field, index, |row: &mut R| write(row, value));
                }
            />
        </td>
    }
}

#[component]
fn PassFailCell(value: Signal<PassFail>, on_change: Callback<PassFail>) -> impl IntoView {
    view! {
        <td>
            <select
                class=move || match value.get() {
                    PassFail::Pass => "table__select table__select--pass",
                    PassFail::Fail => "table__select table__select--fail",
                }
                on:change=move |ev| on_change.run(parse_pass_fail(&event_target_value(&ev)))
            >
                {[PassFail::Pass, PassFail::Fail]
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.as_str() selected=move || value.get() == option>
                                {option.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </td>
    }
}

#[component]
fn RemoveRowCell(form: RwSignal<FormState>, field: &'static str, index: usize) -> impl IntoView {
    view! {
        <td class="table__actions">
            <Button
                variant="danger"
                title="Remove row"
                on_click=Callback::new(move |_| remove_row(form, field, index))
            >
                "✕"
            </Button>
        </td>
    }
}

#[component]
fn AddRowButton(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    view! {
        <div class="row-table__footer">
            <Button variant="primary" on_click=Callback::new(move |_| add_row(form, field))>
                "+ Add row"
            </Button>
        </div>
    }
}

#[component]
pub fn PullingTestTable(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    view! {
        <table class="row-table">
            <thead>
                <tr>
                    <th>"Type"</th>
                    <th>"Pulling Force"</th>
                    <th>"Pulling Time"</th>
                    <th>"Visual Appearance"</th>
                    <th>"Results"</th>
                    <th>"Remark"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || 0..row_count(form, field)
                    key=|index| *index
                    children=move |index| {
                        view! {
                            <tr>
                                <TextCell<PullingTestRow> form=form field=field index=index
                                    read=|r| r.row_type.clone()
                                    write=|r, v| r.row_type = v
                                    placeholder="e.g., Button" />
                                <TextCell<PullingTestRow> form=form field=field index=index
                                    read=|r| r.pulling_force.clone()
                                    write=|r, v| r.pulling_force = v
                                    placeholder="e.g., 90N" />
                                <TextCell<PullingTestRow> form=form field=field index=index
                                    read=|r| r.pulling_time.clone()
                                    write=|r, v| r.pulling_time = v
                                    placeholder="e.g., 10s" />
                                <TextCell<PullingTestRow> form=form field=field index=index
                                    read=|r| r.visual_appearance.clone()
                                    write=|r, v| r.visual_appearance = v />
                                <TextCell<PullingTestRow> form=form field=field index=index
                                    read=|r| r.results.clone()
                                    write=|r, v| r.results = v />
                                <TextCell<PullingTestRow> form=form field=field index=index
                                    read=|r| r.remark.clone()
                                    write=|r, v| r.remark = v />
                                <RemoveRowCell form=form field=field index=index />
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <AddRowButton form=form field=field />
    }
}

#[component]
pub fn ColorFastnessTable(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    view! {
        <table class="row-table">
            <thead>
                <tr>
                    <th>"Fabric Type"</th>
                    <th>"Color"</th>
                    <th>"Color Change"</th>
                    <th>"Rating After Wash"</th>
                    <th>"Requirement"</th>
                    <th>"Pass/Fail"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || 0..row_count(form, field)
                    key=|index| *index
                    children=move |index| {
                        let pass_fail = Signal::derive(move || {
                            read_row(form, field, index, |r: &ColorFastnessRow| r.pass_fail)
                        });
                        view! {
                            <tr>
                                <TextCell<ColorFastnessRow> form=form field=field index=index
                                    read=|r| r.fabric_type.clone()
                                    write=|r, v| r.fabric_type = v />
                                <TextCell<ColorFastnessRow> form=form field=field index=index
                                    read=|r| r.color.clone()
                                    write=|r, v| r.color = v />
                                <TextCell<ColorFastnessRow> form=form field=field index=index
                                    read=|r| r.color_change.clone()
                                    write=|r, v| r.color_change = v />
                                <TextCell<ColorFastnessRow> form=form field=field index=index
                                    read=|r| r.rating_after_wash.clone()
                                    write=|r, v| r.rating_after_wash = v />
                                <TextCell<ColorFastnessRow> form=form field=field index=index
                                    read=|r| r.requirement.clone()
                                    write=|r, v| r.requirement = v />
                                <PassFailCell
                                    value=pass_fail
                                    on_change=Callback::new(move |value| {
                                        update_row(form, field, index, |r: &mut ColorFastnessRow| {
                                            r.pass_fail = value
                                        })
                                    })
                                />
                                <RemoveRowCell form=form field=field index=index />
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <AddRowButton form=form field=field />
    }
}

#[component]
pub fn ColorStainingTable(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    view! {
        <table class="row-table">
            <thead>
                <tr>
                    <th>"Fabric Type"</th>
                    <th>"Color"</th>
                    <th>"Color Staining"</th>
                    <th>"Rating After Wash"</th>
                    <th>"Requirement"</th>
                    <th>"Pass/Fail"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || 0..row_count(form, field)
                    key=|index| *index
                    children=move |index| {
                        let pass_fail = Signal::derive(move || {
                            read_row(form, field, index, |r: &ColorStainingRow| r.pass_fail)
                        });
                        view! {
                            <tr>
                                <TextCell<ColorStainingRow> form=form field=field index=index
                                    read=|r| r.fabric_type.clone()
                                    write=|r, v| r.fabric_type = v />
                                <TextCell<ColorStainingRow> form=form field=field index=index
                                    read=|r| r.color.clone()
                                    write=|r, v| r.color = v />
                                <TextCell<ColorStainingRow> form=form field=field index=index
                                    read=|r| r.color_staining.clone()
                                    write=|r, v| r.color_staining = v />
                                <TextCell<ColorStainingRow> form=form field=field index=index
                                    read=|r| r.rating_after_wash.clone()
                                    write=|r, v| r.rating_after_wash = v />
                                <TextCell<ColorStainingRow> form=form field=field index=index
                                    read=|r| r.requirement.clone()
                                    write=|r, v| r.requirement = v />
                                <PassFailCell
                                    value=pass_fail
                                    on_change=Callback::new(move |value| {
                                        update_row(form, field, index, |r: &mut ColorStainingRow| {
                                            r.pass_fail = value
                                        })
                                    })
                                />
                                <RemoveRowCell form=form field=field index=index />
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <AddRowButton form=form field=field />
    }
}

#[component]
pub fn VisualAssessmentTable(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    let mark = move |index: usize, verdict: Verdict| {
        update_row(form, field, index, |r: &mut VisualAssessmentRow| r.mark(verdict));
    };

    view! {
        <table class="row-table">
            <thead>
                <tr>
                    <th>"Item"</th>
                    <th>"Accepted"</th>
                    <th>"Rejected"</th>
                    <th>"Comments"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || 0..row_count(form, field)
                    key=|index| *index
                    children=move |index| {
                        let accepted = Signal::derive(move || {
                            read_row(form, field, index, |r: &VisualAssessmentRow| r.accepted)
                        });
                        let rejected = Signal::derive(move || {
                            read_row(form, field, index, |r: &VisualAssessmentRow| r.rejected)
                        });
                        view! {
                            <tr>
                                <TextCell<VisualAssessmentRow> form=form field=field index=index
                                    read=|r| r.item.clone()
                                    write=|r, v| r.item = v />
                                <td>
                                    <Checkbox
                                        checked=accepted
                                        on_change=Callback::new(move |on: bool| {
                                            if on {
                                                mark(index, Verdict::Accepted)
                                            }
                                        })
                                    />
                                </td>
                                <td>
                                    <Checkbox
                                        checked=rejected
                                        on_change=Callback::new(move |on: bool| {
                                            if on {
                                                mark(index, Verdict::Rejected)
                                            }
                                        })
                                    />
                                </td>
                                <TextCell<VisualAssessmentRow> form=form field=field index=index
                                    read=|r| r.comments.clone()
                                    write=|r, v| r.comments = v />
                                <RemoveRowCell form=form field=field index=index />
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <AddRowButton form=form field=field />
    }
}

/// Shrinkage measurements; shrinkage % and the verdict follow the measurements
#[component]
pub fn ShrinkageTable(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    view! {
        <table class="row-table">
            <thead>
                <tr>
                    <th title="Include in the report">"✓"</th>
                    <th>"Location"</th>
                    <th>"Original"</th>
                    <th>"Tol (-)"</th>
                    <th>"Tol (+)"</th>
                    <th>"Before Wash"</th>
                    <th>"After Wash"</th>
                    <th>"Shrinkage"</th>
                    <th>"Requirement"</th>
                    <th>"Pass/Fail"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || 0..row_count(form, field)
                    key=|index| *index
                    children=move |index| {
                        let selected = Signal::derive(move || {
                            read_row(form, field, index, |r: &ShrinkageRow| r.selected)
                        });
                        let pass_fail = Signal::derive(move || {
                            read_row(form, field, index, |r: &ShrinkageRow| r.pass_fail)
                        });
                        view! {
                            <tr>
                                <td>
                                    <Checkbox
                                        checked=selected
                                        title="Include in the report"
                                        on_change=Callback::new(move |on: bool| {
                                            update_row(form, field, index, |r: &mut ShrinkageRow| {
                                                r.selected = on
                                            })
                                        })
                                    />
                                </td>
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.location.clone()
                                    write=|r, v| r.location = v />
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.original.clone()
                                    write=|r, v| r.original = v />
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.tol_minus.clone()
                                    write=|r, v| r.tol_minus = v />
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.tol_plus.clone()
                                    write=|r, v| r.tol_plus = v />
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.before_wash.clone()
                                    write=|r, v| {
                                        r.before_wash = v;
                                        r.recalculate();
                                    }
                                    placeholder="e.g., 27 1/2" />
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.after_wash.clone()
                                    write=|r, v| {
                                        r.after_wash = v;
                                        r.recalculate();
                                    } />
                                <td class="table__readonly">
                                    {move || read_row(form, field, index, |r: &ShrinkageRow| r.shrinkage.clone())}
                                </td>
                                <TextCell<ShrinkageRow> form=form field=field index=index
                                    read=|r| r.requirement.clone()
                                    write=|r, v| {
                                        r.requirement = v;
                                        r.recalculate();
                                    } />
                                <PassFailCell
                                    value=pass_fail
                                    on_change=Callback::new(move |value| {
                                        update_row(form, field, index, |r: &mut ShrinkageRow| {
                                            r.pass_fail = value
                                        })
                                    })
                                />
                                <RemoveRowCell form=form field=field index=index />
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <AddRowButton form=form field=field />
    }
}

/// Table editor for a `custom` field, picked by its table kind
#[component]
pub fn RowTableField(form: RwSignal<FormState>, def: FieldDefinition) -> impl IntoView {
    let field = def.name;
    let table = match def.table {
        Some(TableKind::PullingTest) => view! { <PullingTestTable form=form field=field /> }.into_any(),
        Some(TableKind::ColorFastness) => view! { <ColorFastnessTable form=form field=field /> }.into_any(),
        Some(TableKind::ColorStaining) => view! { <ColorStainingTable form=form field=field /> }.into_any(),
        Some(TableKind::VisualAssessment) => {
            view! { <VisualAssessmentTable form=form field=field /> }.into_any()
        }
        Some(TableKind::Shrinkage) => view! { <ShrinkageTable form=form field=field /> }.into_any(),
        None => {
            log::warn!("Custom field '{}' has no table kind", field);
            ().into_any()
        }
    };

    view! {
        <div class="row-table__section">
            <h4 class="row-table__title">{def.label}</h4>
            {table}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::report_type::ReportType;
    use contracts::shared::report_types::{initial_form_data, ReportTypeRegistry};
    use chrono::NaiveDate;

    fn garment_form() -> RwSignal<FormState> {
        let registry = ReportTypeRegistry::standard().unwrap();
        RwSignal::new(initial_form_data(
            &registry,
            ReportType::GarmentWash,
            NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
        ))
    }

    #[test]
    fn test_cell_update_and_recalculate() {
        let form = garment_form();
        update_row(form, "shrinkageRows", 0, |r: &mut ShrinkageRow| {
            r.before_wash = "20".to_string();
            r.after_wash = "19".to_string();
            r.recalculate();
        });
        assert_eq!(
            read_row(form, "shrinkageRows", 0, |r: &ShrinkageRow| r.shrinkage.clone()),
            "-5.00%"
        );
        // wrong row kind or index reads as default
        assert!(!read_row(form, "shrinkageRows", 9, |r: &ShrinkageRow| r.selected));
        assert_eq!(
            read_row(form, "shrinkageRows", 0, |r: &PullingTestRow| r.remark.clone()),
            ""
        );
    }

    #[test]
    fn test_add_row_copies_header_colors() {
        let form = garment_form();
        form.update(|s| s.set_list("color", vec!["BLACK".to_string(), "NAVY".to_string()]));
        add_row(form, "colorFastnessRows");
        assert_eq!(row_count(form, "colorFastnessRows"), 3);
        assert_eq!(
            read_row(form, "colorFastnessRows", 2, |r: &ColorFastnessRow| r.color.clone()),
            "BLACK, NAVY"
        );

        remove_row(form, "colorFastnessRows", 0);
        assert_eq!(row_count(form, "colorFastnessRows"), 2);
    }

    #[test]
    fn test_pass_fail_parsing() {
        assert_eq!(parse_pass_fail("FAIL"), PassFail::Fail);
        assert_eq!(parse_pass_fail("anything"), PassFail::Pass);
    }
}
