//! VPanel project checks: component id scope and binding endpoint
//! resolution.

use crate::ids::check_ids;
use studio_model::VpanelProject;

pub(crate) fn validate(vpanel: &VpanelProject, msgs: &mut Vec<String>) {
    {
        let check = check_ids(vpanel.components.values().map(|c| Some(c.id.as_str())));
        if check.no_id > 0 {
            msgs.push(format!("{} components have no id", check.no_id));
        }
        for id in check.duplicates {
            msgs.push(format!("Duplicate component id: {id}"));
        }
    }

    for binding in vpanel.bindings.values() {
        let name = format!(
            "{} -> {}",
            binding.remote_attribute, binding.local_action
        );

        if let Some(remote) = binding.remote {
            if !vpanel.components.contains_key(&remote) {
                msgs.push(format!("On binding {name}: remote component not found"));
            }
        }
        if let Some(local) = binding.local {
            if !vpanel.components.contains_key(&local) {
                msgs.push(format!("On binding {name}: local component not found"));
            }
        }
    }
}
