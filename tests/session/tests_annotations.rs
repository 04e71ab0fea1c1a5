//! Annotation projection through use-site targets.

use symbridge::host::UseSiteTarget;
use symbridge::{SessionConfig, analyze};

use crate::helpers::fixtures::shapes;

#[test]
fn test_direct_annotations_keep_target() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let label = session.adapter_for(s.label).unwrap();
        let annotations = session.annotations(&label).unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].rendered, "@get:JvmName(\"r\")");
        assert_eq!(annotations[0].argument("name"), Some("\"r\""));
        assert_eq!(annotations[0].use_site_target, Some(UseSiteTarget::Get));
    });
}

#[test]
fn test_getter_sees_get_target_annotations() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let getter = session.adapter_for(s.label_getter).unwrap();
        assert!(session.annotations(&getter).unwrap().is_empty());

        let inherited = session.use_site_annotations(&getter).unwrap();
        assert_eq!(inherited.len(), 1);
        assert_eq!(inherited[0].short_name(), "JvmName");

        let setter = session.adapter_for(s.label_setter).unwrap();
        assert!(session.use_site_annotations(&setter).unwrap().is_empty());
        let value = session.adapter_for(s.label_value).unwrap();
        assert!(session.use_site_annotations(&value).unwrap().is_empty());
    });
}

#[test]
fn test_projection_by_target() {
    let s = shapes();
    analyze(&s.host, SessionConfig::default(), |session| {
        let label = session.adapter_for(s.label).unwrap();
        let getter = session.adapter_for(s.label_getter).unwrap();
        assert_eq!(
            session
                .project_annotations(&getter, Some(UseSiteTarget::Get))
                .unwrap()
                .len(),
            1
        );
        assert!(
            session
                .project_annotations(&label, Some(UseSiteTarget::Field))
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            session.project_annotations(&label, None).unwrap(),
            session.annotations(&label).unwrap()
        );
        assert_eq!(
            session
                .annotations_for_target(&label, UseSiteTarget::Get)
                .unwrap()
                .len(),
            1
        );
    });
}
