//! Filesystem events as seen by the updater

use std::path::PathBuf;

use notify::event::{EventKind, ModifyKind, RenameMode};

/// Kind of change reported for a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    Create,
    Delete,
    /// Content change, never affects routing.
    Update,
}

/// Translate a notify event into per-path events, in the order they happened.
pub fn translate_event(event: &notify::Event) -> Vec<(PathBuf, WatchEvent)> {
    let kind = match event.kind {
        EventKind::Create(_) => Some(WatchEvent::Create),
        EventKind::Remove(_) => Some(WatchEvent::Delete),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => Some(WatchEvent::Delete),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => Some(WatchEvent::Create),
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            // Paths are [from, to]
            return event
                .paths
                .iter()
                .enumerate()
                .map(|(i, path)| {
                    let kind = if i == 0 {
                        WatchEvent::Delete
                    } else {
                        WatchEvent::Create
                    };
                    (path.clone(), kind)
                })
                .collect();
        }
        EventKind::Modify(ModifyKind::Name(_)) => {
            // Backend could not tell which side of the rename this is
            return event
                .paths
                .iter()
                .map(|path| {
                    let kind = if path.exists() {
                        WatchEvent::Create
                    } else {
                        WatchEvent::Delete
                    };
                    (path.clone(), kind)
                })
                .collect();
        }
        EventKind::Modify(_) => Some(WatchEvent::Update),
        _ => None,
    };

    match kind {
        Some(kind) => event.paths.iter().map(|p| (p.clone(), kind)).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, RemoveKind};

    fn event(kind: EventKind, paths: &[&str]) -> notify::Event {
        let mut event = notify::Event::new(kind);
        for path in paths {
            event = event.add_path(PathBuf::from(path));
        }
        event
    }

    #[test]
    fn test_create_and_remove() {
        let created = translate_event(&event(
            EventKind::Create(CreateKind::File),
            &["/app/a.entrypoint.tsx"],
        ));
        assert_eq!(
            created,
            vec![(PathBuf::from("/app/a.entrypoint.tsx"), WatchEvent::Create)]
        );

        let removed = translate_event(&event(
            EventKind::Remove(RemoveKind::Any),
            &["/app/a.entrypoint.tsx"],
        ));
        assert_eq!(removed[0].1, WatchEvent::Delete);
    }

    #[test]
    fn test_rename_both_is_delete_then_create() {
        let renamed = translate_event(&event(
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
            &["/app/old.entrypoint.tsx", "/app/new.entrypoint.tsx"],
        ));
        assert_eq!(
            renamed,
            vec![
                (PathBuf::from("/app/old.entrypoint.tsx"), WatchEvent::Delete),
                (PathBuf::from("/app/new.entrypoint.tsx"), WatchEvent::Create),
            ]
        );
    }

    #[test]
    fn test_rename_halves() {
        let from = translate_event(&event(
            EventKind::Modify(ModifyKind::Name(RenameMode::From)),
            &["/app/a.entrypoint.tsx"],
        ));
        assert_eq!(from[0].1, WatchEvent::Delete);

        let to = translate_event(&event(
            EventKind::Modify(ModifyKind::Name(RenameMode::To)),
            &["/app/b.entrypoint.tsx"],
        ));
        assert_eq!(to[0].1, WatchEvent::Create);
    }

    #[test]
    fn test_content_changes_and_access() {
        let modified = translate_event(&event(
            EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            &["/app/a.entrypoint.tsx"],
        ));
        assert_eq!(modified[0].1, WatchEvent::Update);

        let accessed = translate_event(&event(
            EventKind::Access(AccessKind::Any),
            &["/app/a.entrypoint.tsx"],
        ));
        assert!(accessed.is_empty());
    }
}
