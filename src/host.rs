//! The editor side of an edit: where snapshots come from and where the
//! resulting writes go.

use kurbo::Point;

use crate::{
    edits::{EditOutcome, SelectionEdit},
    GlyphToolsError, NodeRef, Snapshot,
};

/// What an edit needs from the editor hosting it
pub trait Host {
    /// A frozen copy of the current paths and selection
    fn snapshot(&self) -> Result<Snapshot, GlyphToolsError>;

    fn disable_interface_updates(&mut self);
    fn enable_interface_updates(&mut self);

    fn begin_undo_group(&mut self);
    /// Close the current undo group, keeping its writes
    fn end_undo_group(&mut self);
    /// Close the current undo group, reverting its writes
    fn abandon_undo_group(&mut self);

    fn set_position(&mut self, node: NodeRef, position: Point) -> Result<(), GlyphToolsError>;

    /// Show a message to the user
    fn notify(&mut self, title: &str, message: &str);
}

/// An open undo group with interface updates suspended.
///
/// Dropping the transaction without calling [`commit`](Self::commit)
/// abandons it; either way the undo group is closed and interface updates are
/// turned back on.
pub struct ScopedTransaction<'a, H: Host + ?Sized> {
    host: &'a mut H,
    committed: bool,
}

impl<'a, H: Host + ?Sized> ScopedTransaction<'a, H> {
    pub fn begin(host: &'a mut H) -> Self {
        host.disable_interface_updates();
        host.begin_undo_group();
        ScopedTransaction {
            host,
            committed: false,
        }
    }

    pub fn set_position(&mut self, node: NodeRef, position: Point) -> Result<(), GlyphToolsError> {
        self.host.set_position(node, position)
    }

    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<H: Host + ?Sized> Drop for ScopedTransaction<'_, H> {
    fn drop(&mut self) {
        if self.committed {
            self.host.end_undo_group();
        } else {
            log::warn!("Abandoning unfinished edit");
            self.host.abandon_undo_group();
        }
        self.host.enable_interface_updates();
    }
}

/// Compute `edit` against the host's current state and apply it as one undo
/// step.
///
/// Nothing is kept if the edit fails to compute or any write fails. The
/// outcome of every call, success or failure, is reported through
/// [`Host::notify`].
pub fn run_edit<H: Host + ?Sized>(
    host: &mut H,
    edit: &dyn SelectionEdit,
) -> Result<EditOutcome, GlyphToolsError> {
    match apply_edit(host, edit) {
        Ok(outcome) => {
            host.notify(edit.name(), &outcome.message);
            Ok(outcome)
        }
        Err(e) => {
            if e.is_no_op() {
                log::warn!("{}: {}", edit.name(), e);
            } else {
                log::error!("{}: {}", edit.name(), e);
            }
            host.notify(edit.name(), &e.to_string());
            Err(e)
        }
    }
}

fn apply_edit<H: Host + ?Sized>(
    host: &mut H,
    edit: &dyn SelectionEdit,
) -> Result<EditOutcome, GlyphToolsError> {
    let snapshot = host.snapshot()?;
    let outcome = edit.compute(&snapshot)?;
    if let Some(bad) = outcome
        .edits
        .iter()
        .find(|e| !e.x.is_finite() || !e.y.is_finite())
    {
        return Err(GlyphToolsError::NonFiniteEdit { node: bad.node });
    }

    let mut transaction = ScopedTransaction::begin(host);
    for write in &outcome.edits {
        transaction.set_position(write.node, write.position())?;
    }
    transaction.commit();
    Ok(outcome)
}

/// A stand-alone document: a snapshot that can be edited and undone
#[derive(Debug, Clone, Default)]
pub struct SnapshotHost {
    document: Snapshot,
    undo_stack: Vec<Vec<(NodeRef, Point)>>,
    open_group: Option<Vec<(NodeRef, Point)>>,
    suspended: usize,
    notifications: Vec<(String, String)>,
}

impl SnapshotHost {
    pub fn new(document: Snapshot) -> Self {
        SnapshotHost {
            document,
            ..Default::default()
        }
    }

    pub fn document(&self) -> &Snapshot {
        &self.document
    }

    pub fn into_document(self) -> Snapshot {
        self.document
    }

    pub fn notifications(&self) -> &[(String, String)] {
        &self.notifications
    }

    pub fn interface_updates_enabled(&self) -> bool {
        self.suspended == 0
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Revert the most recent undo group. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(group) = self.undo_stack.pop() else {
            return false;
        };
        self.revert(group);
        true
    }

    fn revert(&mut self, group: Vec<(NodeRef, Point)>) {
        for (node, position) in group.into_iter().rev() {
            if let Ok(n) = self.document.node_mut(node) {
                n.set_position(position);
            }
        }
    }
}

impl Host for SnapshotHost {
    fn snapshot(&self) -> Result<Snapshot, GlyphToolsError> {
        Ok(self.document.clone())
    }

    fn disable_interface_updates(&mut self) {
        self.suspended += 1;
    }

    fn enable_interface_updates(&mut self) {
        self.suspended = self.suspended.saturating_sub(1);
    }

    fn begin_undo_group(&mut self) {
        self.open_group.get_or_insert_with(Vec::new);
    }

    fn end_undo_group(&mut self) {
        if let Some(group) = self.open_group.take() {
            if !group.is_empty() {
                self.undo_stack.push(group);
            }
        }
    }

    fn abandon_undo_group(&mut self) {
        if let Some(group) = self.open_group.take() {
            self.revert(group);
        }
    }

    fn set_position(&mut self, node: NodeRef, position: Point) -> Result<(), GlyphToolsError> {
        let target = self.document.node_mut(node)?;
        let previous = target.to_kurbo();
        target.set_position(position);
        match self.open_group.as_mut() {
            Some(group) => group.push((node, previous)),
            None => self.undo_stack.push(vec![(node, previous)]),
        }
        Ok(())
    }

    fn notify(&mut self, title: &str, message: &str) {
        log::info!("{}: {}", title, message);
        self.notifications
            .push((title.to_string(), message.to_string()));
    }
}
