use models::FormVariant;
use serde::Serialize;
use services::{FieldRule, FieldValidator};

#[derive(Serialize)]
struct FormSchema {
    form: FormVariant,
    fields: Vec<FieldRule>,
}

fn main() -> serde_json::Result<()> {
    let schemas: Vec<FormSchema> = FormVariant::ALL
        .iter()
        .map(|form| FormSchema {
            form: *form,
            fields: form.fields().iter().map(|field| FieldValidator::describe(*field)).collect(),
        })
        .collect();

    // Print the rule tables as JSON
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
