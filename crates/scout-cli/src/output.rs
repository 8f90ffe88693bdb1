//! Plain-text views and JSON printing for command output.

use std::fmt;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use scout_runtime::ScanStats;
use scout_types::{ProjectId, ProjectRecord};
use serde::Serialize;

/// Colors only when stdout is a terminal.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One JSON object per line, for streaming output.
pub fn print_json_line<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

// --------------------------------------------------------
// Project list
// --------------------------------------------------------

pub struct ProjectListView<'a> {
    projects: &'a [ProjectRecord],
    color: bool,
}

impl<'a> ProjectListView<'a> {
    pub fn new(projects: &'a [ProjectRecord]) -> Self {
        Self {
            projects,
            color: use_color(),
        }
    }

    pub fn plain(projects: &'a [ProjectRecord]) -> Self {
        Self {
            projects,
            color: false,
        }
    }
}

impl fmt::Display for ProjectListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.projects.is_empty() {
            return writeln!(f, "No projects found");
        }

        writeln!(f, "Found {} {}", self.projects.len(), plural(self.projects.len(), "project"))?;
        for project in self.projects {
            let name = format!("{:<24}", project.name);
            if self.color {
                writeln!(
                    f,
                    "  {} {}  {}",
                    name.bold(),
                    project.id.as_str().dimmed(),
                    project.path.display()
                )?;
            } else {
                writeln!(f, "  {} {}  {}", name, project.id, project.path.display())?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Single project
// --------------------------------------------------------

pub struct ProjectView<'a> {
    project: &'a ProjectRecord,
}

impl<'a> ProjectView<'a> {
    pub fn new(project: &'a ProjectRecord) -> Self {
        Self { project }
    }
}

impl fmt::Display for ProjectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accessed = self
            .project
            .last_accessed
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S");

        writeln!(f, "Opened {}", self.project.name)?;
        writeln!(f, "  id:            {}", self.project.id)?;
        writeln!(f, "  path:          {}", self.project.path.display())?;
        writeln!(f, "  last accessed: {}", accessed)
    }
}

// --------------------------------------------------------
// Scan statistics
// --------------------------------------------------------

pub struct StatsView<'a> {
    stats: &'a ScanStats,
}

impl<'a> StatsView<'a> {
    pub fn new(stats: &'a ScanStats) -> Self {
        Self { stats }
    }
}

impl fmt::Display for StatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        write!(
            f,
            "Scanned {} {} in {} ms: {} {} visited, {} read {}",
            s.roots_scanned,
            plural(s.roots_scanned, "root"),
            s.elapsed.as_millis(),
            s.dirs_visited,
            plural(s.dirs_visited, "directory"),
            s.read_errors,
            plural(s.read_errors, "error"),
        )?;
        if s.roots_skipped > 0 {
            write!(f, " ({} skipped after timeout)", s.roots_skipped)?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Watch stream
// --------------------------------------------------------

/// JSON line emitted by `scout watch --format json`.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum WatchLine<'a> {
    Watching {
        projects: &'a [ProjectRecord],
    },
    ProjectChanged {
        project: &'a ProjectRecord,
    },
    Rescanned {
        projects: &'a [ProjectRecord],
    },
    Error {
        #[serde(rename = "projectId")]
        project_id: &'a ProjectId,
        message: &'a str,
    },
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => noun.to_string(),
        (_, "directory") => "directories".to_string(),
        _ => format!("{}s", noun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_types::ProjectRecord;
    use std::time::Duration;

    fn record(name: &str) -> ProjectRecord {
        ProjectRecord::discovered(
            ProjectId::new("0123456789abcdef"),
            name,
            format!("/opt/{}", name),
        )
    }

    #[test]
    fn test_empty_list() {
        let view = ProjectListView::plain(&[]);
        assert_eq!(view.to_string(), "No projects found\n");
    }

    #[test]
    fn test_list_shows_name_id_and_path() {
        let projects = vec![record("alpha")];
        let text = ProjectListView::plain(&projects).to_string();

        assert!(text.starts_with("Found 1 project\n"));
        assert!(text.contains("alpha"));
        assert!(text.contains("0123456789abcdef"));
        assert!(text.contains("/opt/alpha"));
    }

    #[test]
    fn test_stats_view() {
        let stats = ScanStats {
            roots_scanned: 2,
            roots_skipped: 1,
            dirs_visited: 1,
            read_errors: 0,
            elapsed: Duration::from_millis(12),
        };
        assert_eq!(
            StatsView::new(&stats).to_string(),
            "Scanned 2 roots in 12 ms: 1 directory visited, 0 read errors (1 skipped after timeout)\n"
        );
    }

    #[test]
    fn test_watch_line_tags() {
        let project = record("alpha");
        let json = serde_json::to_value(WatchLine::ProjectChanged { project: &project }).unwrap();
        assert_eq!(json["event"], "projectChanged");
        assert_eq!(json["project"]["name"], "alpha");

        let json = serde_json::to_value(WatchLine::Error {
            project_id: &project.id,
            message: "boom",
        })
        .unwrap();
        assert_eq!(json["event"], "error");
        assert_eq!(json["projectId"], "0123456789abcdef");
    }
}
