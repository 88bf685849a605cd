//! HowTo compilation.

use crate::config::{HOWTO_ID_SUFFIX, HOWTO_STEP_ID_SUFFIX, HOWTO_TYPE};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::HowToData;
use crate::schema::context::{IdRef, PageContext};
use crate::schema::fragment::{non_empty, HowToNode, HowToStepNode, SchemaFragment};
use crate::utils::strip_all_tags;

/// Compiles HowTo data into at most one `HowTo` fragment.
///
/// Steps are numbered from 1 over the retained steps
/// (`url = canonical#howto-step-{i + 1}`). `name`, `description` and step
/// fields are stripped to plain text and omitted when empty; `totalTime` is
/// passed through as stored.
///
/// # Returns
///
/// An empty list when no step survives the empty-step filter, whatever the
/// metadata.
pub fn compile_howto(
    data: &HowToData,
    ctx: &PageContext,
    stats: &ProcessingStats,
) -> Vec<SchemaFragment> {
    let steps: Vec<HowToStepNode> = data
        .retained_steps()
        .enumerate()
        .map(|(index, step)| {
            HowToStepNode::new(
                format!("{}{}", ctx.fragment_id(HOWTO_STEP_ID_SUFFIX), index + 1),
                non_empty(strip_all_tags(&step.name)),
                non_empty(strip_all_tags(&step.text)),
            )
        })
        .collect();

    if steps.is_empty() {
        log::debug!("HowTo has no steps, nothing to compile");
        return Vec::new();
    }

    stats.increment_info(InfoType::HowToCompiled);
    vec![SchemaFragment::HowTo(HowToNode {
        type_name: HOWTO_TYPE,
        id: ctx.fragment_id(HOWTO_ID_SUFFIX),
        main_entity_of_page: IdRef::new(ctx.main_schema_id.clone()),
        name: non_empty(strip_all_tags(&data.name)),
        description: non_empty(strip_all_tags(&data.description)),
        total_time: non_empty(data.total_time.clone()),
        step: steps,
    })]
}

/// True when [`compile_howto`] would emit its fragment.
pub fn would_emit_howto(data: &HowToData) -> bool {
    data.has_steps()
}
