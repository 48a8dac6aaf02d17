#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use taskdeck::libs::error::Error;
    use taskdeck::libs::service::{TagService, TaskService};
    use taskdeck::libs::task::{NewTask, Priority, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct ServiceTestContext;

    impl TestContext for ServiceTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            ServiceTestContext
        }
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_task_input_validation(_ctx: &mut ServiceTestContext) {
        let mut service = TaskService::new().unwrap();

        let err = service.create(&NewTask::new("")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service.create(&NewTask::new("   ")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service.create(&NewTask::new(&"x".repeat(201))).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let mut new = NewTask::new("Valid title");
        new.description = Some("y".repeat(1001));
        let err = service.create(&new).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // The same limits apply to updates
        let task = service.create(&NewTask::new("Updatable")).unwrap();
        let update = TaskUpdate {
            title: Some(String::new()),
            ..Default::default()
        };
        let err = service.update(task.id, &update).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // And a rejected update leaves the task as it was
        let unchanged = service.get(task.id).unwrap();
        assert_eq!(unchanged.title, "Updatable");
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_tag_input_validation(_ctx: &mut ServiceTestContext) {
        let mut service = TagService::new().unwrap();

        let err = service.create("", None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service.create(&"x".repeat(51), None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service.create("badcolor", Some("crimson")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        assert!(service.create("svc-named", Some("#abc")).is_ok());

        let err = service.create("svc-named", None).unwrap_err();
        assert!(matches!(err, Error::TagExists(_)));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_missing_ids_surface_as_not_found(_ctx: &mut ServiceTestContext) {
        let mut tasks = TaskService::new().unwrap();
        let mut tags = TagService::new().unwrap();

        assert!(matches!(tasks.get(424_242).unwrap_err(), Error::TaskNotFound(424_242)));
        assert!(matches!(tasks.delete(424_242).unwrap_err(), Error::TaskNotFound(424_242)));
        assert!(matches!(tags.delete(424_242).unwrap_err(), Error::TagNotFound(424_242)));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_update_payload_unset_vs_null(_ctx: &mut ServiceTestContext) {
        let mut service = TaskService::new().unwrap();

        let mut new = NewTask::new("Payload target");
        new.description = Some("still here".to_string());
        let task = service.create(&new).unwrap();

        // A payload that omits description leaves it alone
        let update: TaskUpdate = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        let updated = service.update(task.id, &update).unwrap();
        assert!(updated.completed);
        assert_eq!(updated.description.as_deref(), Some("still here"));

        // A payload with an explicit null clears it
        let update: TaskUpdate = serde_json::from_str(r#"{"description": null}"#).unwrap();
        let updated = service.update(task.id, &update).unwrap();
        assert_eq!(updated.description, None);
    }

    // The reference implementation stored any priority string as-is; here
    // the enum is enforced strictly and out-of-set values never get in.
    #[test_context(ServiceTestContext)]
    #[test]
    fn test_priority_is_strict(_ctx: &mut ServiceTestContext) {
        assert!(serde_json::from_str::<TaskUpdate>(r#"{"priority": "urgent"}"#).is_err());
        assert!(serde_json::from_str::<NewTask>(r#"{"title": "t", "priority": "none"}"#).is_err());

        let update: TaskUpdate = serde_json::from_str(r#"{"priority": "high"}"#).unwrap();
        assert_eq!(update.priority, Some(Priority::High));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_task_json_shape(_ctx: &mut ServiceTestContext) {
        let mut tags = TagService::new().unwrap();
        let mut service = TaskService::new().unwrap();

        let tag = tags.create("svc-shape", Some("#ff0000")).unwrap();
        let mut new = NewTask::new("Wire shape");
        new.tag_ids = vec![tag.id];
        let task = service.create(&new).unwrap();

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["title"], "Wire shape");
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(value["due_date"], serde_json::Value::Null);
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["completed"], false);
        assert_eq!(value["tags"][0]["name"], "svc-shape");
        assert_eq!(value["tags"][0]["color"], "#ff0000");
    }
}
