use crate::output::print_json;
use playbook_core::tags;

pub fn run(text: &str, json: bool) -> anyhow::Result<()> {
    let suggestions = tags::suggest(text);

    if json {
        print_json(&suggestions)?;
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No tag suggestions.");
    } else {
        println!("{}", suggestions.join(", "));
    }
    Ok(())
}
