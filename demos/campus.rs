use campus_access::{AbacBuilder, Decide, Decision, RbacBuilder, Result};
use tracing_subscriber::EnvFilter;

const USERS: &str = r#"{
    "users": [
        { "id": "Alice", "role": "Student" },
        { "id": "Bob", "role": "TA" },
        { "id": "Charlie", "role": "Instructor" }
    ],
    "roles": {
        "Student": ["View_Assignment"],
        "TA": ["View_Assignment", "Grade_Assignment"],
        "Instructor": ["View_Assignment", "Grade_Assignment", "Modify_Course"]
    }
}"#;

const STUDENTS: &str = r#"{
    "students": [
        { "id": "Alice", "year": 2, "major": "CS", "gpa": 3.5 },
        { "id": "Bob", "year": 1, "major": "EE", "gpa": 3.0 },
        { "id": "Charlie", "year": 3, "major": "CS", "gpa": 2.5 }
    ],
    "materials": [
        { "id": "Intro_CS", "level": 1, "department": "CS", "minYear": 1, "minGpa": 2.0 },
        { "id": "Advanced_EE", "level": 3, "department": "EE", "minYear": 2, "minGpa": 3.0 },
        { "id": "Math_Open", "level": 1, "department": "Math", "minYear": 1, "minGpa": 0.0 }
    ]
}"#;

const PERMISSIONS: [&str; 3] = ["View_Assignment", "Grade_Assignment", "Modify_Course"];

// Registry ids come back sorted; checks are printed in declaration order.
const MATERIALS: [&str; 3] = ["Intro_CS", "Advanced_EE", "Math_Open"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Role-based checks: every user against every permission.
    let rbac = RbacBuilder::from_json(USERS).build()?;
    let evaluator = rbac.evaluator();
    for user in rbac.users().iter() {
        for permission in &PERMISSIONS {
            let line = match evaluator.decide(user.id(), permission) {
                Decision::Granted { subject, resource } => {
                    format!("Access GRANTED to {} ({}) for {}", subject, user.role(), resource)
                }
                Decision::Denied { subject, resource } => {
                    format!("Access DENIED to {} ({}) for {}", subject, user.role(), resource)
                }
                Decision::Unresolved { subject, .. } => format!("User {} not found", subject),
            };
            println!("{}", line);
        }
    }

    // Attribute-based checks: every student against every material.
    for line in abac_lines()? {
        println!("{}", line);
    }

    Ok(())
}

fn abac_lines() -> Result<Vec<String>> {
    let abac = AbacBuilder::from_json(STUDENTS).build()?;
    let evaluator = abac.evaluator();

    Ok(abac
        .students()
        .ids()
        .flat_map(|student| MATERIALS.iter().map(move |material| (student, *material)))
        .map(|(student, material)| render(&evaluator.decide(student, material)))
        .collect())
}

fn render(decision: &Decision) -> String {
    match decision {
        Decision::Granted { subject, resource } => {
            format!("Access GRANTED to {} for {}", subject, resource)
        }
        Decision::Denied { subject, resource } => {
            format!("Access DENIED to {} for {}", subject, resource)
        }
        Decision::Unresolved { .. } => "Student or Material not found".to_string(),
    }
}
