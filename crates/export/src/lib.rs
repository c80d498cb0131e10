//! Export helpers for CSV and JSON artifacts.

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use impact_trajectory::TrajectoryState;

    const HEADER: &str = "time_s,altitude_m,velocity_m_s,mass_kg,mass_fraction,dynamic_pressure_pa,air_density_kg_m3,fragmented";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        create_parent(path)?;
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    pub(crate) fn create_parent(path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    /// Write the trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One CSV row of a recorded trajectory.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub time_s: f64,
        pub altitude_m: f64,
        pub velocity_m_s: f64,
        pub mass_kg: f64,
        pub mass_fraction: f64,
        pub dynamic_pressure_pa: f64,
        pub air_density_kg_m3: f64,
        pub fragmented: bool,
    }

    impl From<&TrajectoryState> for Record {
        fn from(state: &TrajectoryState) -> Self {
            Self {
                time_s: state.time_s,
                altitude_m: state.altitude_m,
                velocity_m_s: state.velocity_m_s,
                mass_kg: state.mass_kg,
                mass_fraction: state.mass_fraction,
                dynamic_pressure_pa: state.dynamic_pressure_pa,
                air_density_kg_m3: state.air_density_kg_m3,
                fragmented: state.fragmented,
            }
        }
    }

    impl Record {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{:.3},{:.3},{:.6e},{:.6},{:.6e},{:.6e},{}",
                self.time_s,
                self.altitude_m,
                self.velocity_m_s,
                self.mass_kg,
                self.mass_fraction,
                self.dynamic_pressure_pa,
                self.air_density_kg_m3,
                if self.fragmented { "true" } else { "false" },
            )
        }
    }

    /// Write a header followed by every state, then flush.
    pub fn write_all(writer: &mut dyn Write, states: &[TrajectoryState]) -> io::Result<()> {
        write_header(writer)?;
        for state in states {
            Record::from(state).write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod report {
    use std::fs::File;
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use crate::trajectory::create_parent;

    /// Write `report` as pretty-printed JSON, creating parent directories as needed.
    pub fn write_json<T: Serialize>(path: &Path, report: &T) -> io::Result<()> {
        create_parent(path)?;
        let mut writer = BufWriter::new(File::create(path)?);
        to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
        writer.flush()
    }
}
