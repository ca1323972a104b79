use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use super::registry::BodyBuilder;

/// Body built from a `{{placeholder}}` template declared in the config file.
///
/// Supported placeholders: `seq` (per-template call counter starting at 0),
/// `timestamp_ms`, `timestamp_s`, `rand_int` and `rand_hex`. Unknown
/// placeholders are left in place.
pub(super) struct TemplateBody {
    template: String,
    seq: AtomicU64,
}

impl TemplateBody {
    pub(super) const fn new(template: String) -> Self {
        Self {
            template,
            seq: AtomicU64::new(0),
        }
    }

    fn vars(&self) -> BTreeMap<String, String> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let now_ms = chrono::Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let mut vars = BTreeMap::new();
        vars.insert("seq".to_owned(), seq.to_string());
        vars.insert("timestamp_ms".to_owned(), now_ms.to_string());
        vars.insert(
            "timestamp_s".to_owned(),
            now_ms.div_euclid(1000).to_string(),
        );
        vars.insert(
            "rand_int".to_owned(),
            rng.gen_range(0..1_000_000_u32).to_string(),
        );
        vars.insert("rand_hex".to_owned(), format!("{:016x}", rng.r#gen::<u64>()));
        vars
    }
}

impl BodyBuilder for TemplateBody {
    fn build(&self) -> String {
        render_template(&self.template, &self.vars())
    }
}

pub(crate) fn render_template(input: &str, vars: &BTreeMap<String, String>) -> String {
    let mut rest = input;
    let mut output = String::with_capacity(input.len());

    loop {
        let Some(start) = rest.find("{{") else {
            output.push_str(rest);
            break;
        };
        let (before, after_start) = rest.split_at(start);
        output.push_str(before);
        let Some(after) = after_start.strip_prefix("{{") else {
            output.push_str(after_start);
            break;
        };
        let Some(end) = after.find("}}") else {
            output.push_str("{{");
            output.push_str(after);
            break;
        };
        let (key_part, after_end) = after.split_at(end);
        let key = key_part.trim();
        if let Some(value) = vars.get(key) {
            output.push_str(value);
        } else {
            output.push_str("{{");
            output.push_str(key);
            output.push_str("}}");
        }
        rest = match after_end.strip_prefix("}}") {
            Some(remaining) => remaining,
            None => {
                output.push_str(after_end);
                break;
            }
        };
    }

    output
}
