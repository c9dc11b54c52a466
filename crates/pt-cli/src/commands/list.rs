//! List command for enumerating tracked projects.

use std::io::Write;

use anyhow::Result;
use pt_core::TrackerData;

pub fn run<W: Write>(writer: &mut W, data: &TrackerData) -> Result<()> {
    writeln!(writer, "Projects:")?;
    for project in &data.projects {
        writeln!(writer, "- {}", project.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn list_preserves_creation_order() {
        let mut data = TrackerData::default();
        for name in ["zeta", "alpha", "mid"] {
            pt_core::create(&mut data, name).unwrap();
        }
        let mut output = Vec::new();

        run(&mut output, &data).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
        Projects:
        - zeta
        - alpha
        - mid
        ");
    }

    #[test]
    fn empty_tracker_lists_nothing() {
        let data = TrackerData::default();
        let mut output = Vec::new();

        run(&mut output, &data).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Projects:\n");
    }
}
