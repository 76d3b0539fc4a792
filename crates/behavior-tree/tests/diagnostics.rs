use std::{
    io,
    sync::{Arc, Mutex},
};

use behavior_tree::{Action, Node, Sequence, Status, Switch, Tree, TreeConfig};

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_ticks(config: TreeConfig, ticks: usize) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut tree = Tree::new(Node::named(
            "guard",
            Sequence::new(vec![
                Node::named("patrol", Action::new(|_: &mut ()| Status::Success)),
                Node::new(Action::new(|_: &mut ()| Status::Running)),
            ]),
        ))
        .with_config(config);

        for _ in 0..ticks {
            tree.tick(&mut ());
        }
    });

    capture.contents()
}

#[test]
fn named_nodes_report_status_when_debug_is_on() {
    let output = capture_ticks(TreeConfig::default().with_debug(true), 2);

    assert_eq!(output.matches("patrol: Success").count(), 2);
    assert_eq!(output.matches("guard: Running").count(), 2);
}

#[test]
fn diagnostics_are_silent_when_debug_is_off() {
    let output = capture_ticks(TreeConfig::default(), 3);
    assert!(output.is_empty(), "unexpected output: {output}");
}

#[test]
fn switch_reports_selected_branch() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let switch = Switch::new(
            Node::new(Action::new(|_: &mut ()| Status::Success)),
            Node::new(Action::new(|_: &mut ()| Status::Failure)),
        );
        let flag = switch.flag();
        let mut tree = Tree::new(Node::named("router", switch))
            .with_config(TreeConfig::default().with_debug(true));

        tree.tick(&mut ());
        flag.set(true);
        tree.tick(&mut ());
    });

    let output = capture.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected output: {output}");
    assert!(lines[0].contains("false branch selected"), "{}", lines[0]);
    assert!(lines[1].contains("router: Failure"), "{}", lines[1]);
    assert!(lines[2].contains("true branch selected"), "{}", lines[2]);
    assert!(lines[3].contains("router: Success"), "{}", lines[3]);
}
