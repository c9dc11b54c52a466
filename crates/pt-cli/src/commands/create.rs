//! Create command for adding a new project.

use std::io::Write;

use anyhow::Result;
use pt_core::TrackerData;

pub fn run<W: Write>(writer: &mut W, data: &mut TrackerData, name: &str) -> Result<()> {
    pt_core::create(data, name)?;
    writeln!(writer, "Project '{name}' created.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_adds_idle_project() {
        let mut data = TrackerData::default();
        let mut output = Vec::new();

        run(&mut output, &mut data, "my_website").unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Project 'my_website' created.\n"
        );
        assert!(data.contains("my_website"));
        assert!(!data.get("my_website").unwrap().is_active());
    }

    #[test]
    fn duplicate_create_fails_without_mutation() {
        let mut data = TrackerData::default();
        let mut output = Vec::new();
        run(&mut output, &mut data, "alpha").unwrap();

        let err = run(&mut output, &mut data, "alpha").unwrap_err();
        assert_eq!(err.to_string(), "project 'alpha' already exists");
        assert_eq!(data.projects.len(), 1);
    }
}
