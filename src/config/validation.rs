use super::{ConfigError, Result, Settings, TaskConfig};

/// Validates a whole run up front. Any failure rejects the run before the
/// first task executes.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.tasks.is_empty() {
        return Err(ConfigError::Validation(
            "no cleaning tasks configured".to_string(),
        ));
    }

    for (index, task) in settings.tasks.iter().enumerate() {
        validate_task(task).map_err(|e| match e {
            ConfigError::Validation(msg) => {
                ConfigError::Validation(format!("task {}: {}", index + 1, msg))
            }
            other => other,
        })?;
    }

    Ok(())
}

pub fn validate_task(task: &TaskConfig) -> Result<()> {
    if task.source_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "source path must not be empty".to_string(),
        ));
    }

    if task.has_destination() {
        if task.move_days_ago.is_none() {
            return Err(ConfigError::Validation(
                "move age in days is required when a destination path is set".to_string(),
            ));
        }
    } else if task.move_days_ago.is_some() {
        return Err(ConfigError::Validation(
            "move age in days is set but no destination path is configured".to_string(),
        ));
    }

    // Files must age at the destination before becoming eligible for
    // deletion there, so the delete threshold has to sit strictly past
    // the move threshold.
    if let (Some(delete_days), Some(move_days)) = (task.delete_days_ago, task.move_days_ago) {
        if delete_days <= move_days {
            return Err(ConfigError::Validation(format!(
                "delete age ({} days) must be strictly greater than move age ({} days)",
                delete_days, move_days
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(
        source: &str,
        destination: Option<&str>,
        delete_days: Option<u32>,
        move_days: Option<u32>,
    ) -> TaskConfig {
        TaskConfig {
            source_path: source.to_string(),
            destination_path: destination.map(str::to_string),
            delete_days_ago: delete_days,
            move_days_ago: move_days,
        }
    }

    fn settings(tasks: Vec<TaskConfig>) -> Settings {
        Settings {
            tasks,
            loop_delay_minutes: None,
        }
    }

    #[test]
    fn test_empty_task_list_rejected() {
        let result = validate_settings(&settings(vec![]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_source_path_rejected() {
        let result = validate_task(&task("  ", None, None, None));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_destination_requires_move_age() {
        let result = validate_task(&task("/tmp/src", Some("/tmp/dst"), Some(10), None));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_move_age_without_destination_rejected() {
        let result = validate_task(&task("/tmp/src", None, None, Some(5)));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_delete_age_must_exceed_move_age() {
        let result = validate_task(&task("/tmp/src", Some("/tmp/dst"), Some(5), Some(10)));
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let result = validate_task(&task("/tmp/src", Some("/tmp/dst"), Some(10), Some(10)));
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let result = validate_task(&task("/tmp/src", Some("/tmp/dst"), Some(11), Some(10)));
        assert!(result.is_ok());
    }

    #[test]
    fn test_whole_run_rejected_on_one_bad_task() {
        let result = validate_settings(&settings(vec![
            task("/tmp/a", None, Some(7), None),
            task("/tmp/b", Some("/tmp/b-archive"), Some(5), Some(10)),
        ]));

        match result {
            Err(ConfigError::Validation(msg)) => assert!(msg.starts_with("task 2:")),
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_delete_only_task_is_valid() {
        assert!(validate_task(&task("/tmp/src", None, Some(7), None)).is_ok());
        assert!(validate_task(&task("/tmp/src", None, None, None)).is_ok());
    }
}
