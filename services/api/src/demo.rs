use clap::Args;
use receptionist::directory::EmployeeDirectory;
use receptionist::error::AppError;
use receptionist::lookup::{lookup_employee, FunctionCallResponse, LookupResult};
use serde_json::{json, Value};

#[derive(Args, Debug, Default)]
pub(crate) struct LookupArgs {
    /// Employee name as a caller would say it
    pub(crate) name: Option<String>,
    /// Raw function-call body, e.g. '{"args":["Lisa Chen"]}'
    #[arg(long, conflicts_with = "name")]
    pub(crate) json: Option<String>,
    /// Print the JSON response the voice platform would receive
    #[arg(long)]
    pub(crate) raw: bool,
}

pub(crate) fn lookup_body(args: &LookupArgs) -> Result<Value, AppError> {
    match (&args.json, &args.name) {
        (Some(raw), _) => serde_json::from_str(raw)
            .map_err(|err| AppError::Input(format!("--json is not valid JSON ({err})"))),
        (None, Some(name)) => Ok(json!({ "employee_name": name })),
        (None, None) => Err(AppError::Input(
            "provide an employee name or a --json request body".to_string(),
        )),
    }
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let body = lookup_body(&args)?;
    let directory = EmployeeDirectory::seeded();
    let result = lookup_employee(&directory, &body);

    if args.raw {
        let response = FunctionCallResponse::from(result);
        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|err| AppError::Input(format!("response could not be rendered ({err})")))?;
        println!("{rendered}");
    } else {
        println!("Employee lookup");
        println!("Request body: {body}");
        for line in describe_lookup(&result) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn describe_lookup(result: &LookupResult) -> Vec<String> {
    match result {
        LookupResult::Found(record) => vec![
            format!("\nFound {} ({})", record.name, record.id.0),
            format!("- Department: {}", record.department),
            format!("- Location: {}", record.location),
            format!("- Extension: {}", record.extension),
            format!("- Status: {}", record.availability_label()),
        ],
        LookupResult::NotFound(name) => vec![format!("\nNo directory match for \"{name}\"")],
        LookupResult::InvalidRequest => {
            vec!["\nNo employee name could be extracted from the request".to_string()]
        }
    }
}

pub(crate) fn run_directory() {
    let directory = EmployeeDirectory::seeded();
    println!("Employee directory ({} entries)", directory.len());
    for record in directory.records() {
        println!(
            "- {} | {} | {} | {} | ext {} | {}",
            record.id.0,
            record.name,
            record.department,
            record.location,
            record.extension,
            record.availability_label()
        );
    }
}
