use rand::Rng;
use rand::distributions::Alphanumeric;

pub(super) const EMPTY_OBJECT: &str = "empty_object";
pub(super) const RANDOM_USER: &str = "random_user";
pub(super) const TIMESTAMP: &str = "timestamp";

const FIRST_NAMES: [&str; 8] = [
    "ada", "grace", "linus", "margaret", "ken", "barbara", "dennis", "radia",
];

pub(super) fn empty_object() -> String {
    "{}".to_owned()
}

pub(super) fn random_user() -> String {
    let mut rng = rand::thread_rng();
    let first = FIRST_NAMES
        .get(rng.gen_range(0..FIRST_NAMES.len()))
        .copied()
        .unwrap_or("user");
    let suffix: String = (&mut rng)
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_ascii_lowercase();
    let age: u8 = rng.gen_range(18..=90);
    serde_json::json!({
        "name": format!("{}_{}", first, suffix),
        "email": format!("{}.{}@example.com", first, suffix),
        "age": age,
    })
    .to_string()
}

pub(super) fn timestamp() -> String {
    serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
    .to_string()
}
