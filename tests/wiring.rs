use egui::Pos2;
use gate_wiring::{Circuit, Editor, EditorConfig, Gate, GateId, PortId, PortKind, WiringState};

fn and_port(name: &str) -> PortId {
    PortId::new(format!("port-gate-and-1-{}", name))
}

fn or_port(name: &str) -> PortId {
    PortId::new(format!("port-gate-or-1-{}", name))
}

fn positions(editor: &Editor) -> Vec<(GateId, Pos2)> {
    editor
        .circuit()
        .gates()
        .iter()
        .map(|gate| (gate.id().clone(), gate.position()))
        .collect()
}

#[test]
fn test_resolved_positions_follow_drags() {
    let mut editor = Editor::default();
    let moves = [
        ("gate-and-1", Pos2::new(10.0, 10.0)),
        ("gate-or-1", Pos2::new(640.0, 12.5)),
        ("gate-and-1", Pos2::new(-30.0, 400.0)),
    ];

    for (gate_id, position) in moves {
        editor.drag_gate(&GateId::from(gate_id), position);

        for gate in editor.circuit().gates() {
            for port in gate.ports() {
                assert_eq!(
                    editor.circuit().ports().position(port.id()),
                    Some(gate.position() + port.offset())
                );
            }
        }
    }
}

#[test]
fn test_idle_press_on_input_is_noop() {
    let mut editor = Editor::default();
    editor.press_port(&or_port("in1"));

    assert_eq!(editor.wiring(), &WiringState::Idle);
    assert!(editor.circuit().connections().is_empty());
}

#[test]
fn test_idle_press_on_output_starts_pending() {
    let mut editor = Editor::default();
    editor.press_port(&and_port("out"));

    assert_eq!(
        editor.wiring(),
        &WiringState::Pending { source: and_port("out") }
    );
}

#[test]
fn test_press_valid_input_adds_exactly_one_connection() {
    let mut editor = Editor::default();
    editor.press_port(&and_port("out"));
    editor.press_port(&or_port("in1"));

    let connections = editor.circuit().connections();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].from(), &and_port("out"));
    assert_eq!(connections[0].to(), &or_port("in1"));
    assert!(editor.wiring().is_idle());
}

#[test]
fn test_release_over_invalid_target_cancels() {
    let mut editor = Editor::default();
    editor.press_port(&and_port("out"));

    // Another output is not a valid target
    editor.enter_port(&or_port("out"));
    editor.release_pointer();

    assert!(editor.circuit().connections().is_empty());
    assert!(editor.wiring().is_idle());
}

#[test]
fn test_release_over_empty_space_cancels() {
    let mut editor = Editor::default();
    editor.press_port(&and_port("out"));
    editor.move_pointer(Pos2::new(700.0, 500.0));
    editor.release_pointer();

    assert!(editor.circuit().connections().is_empty());
    assert!(editor.wiring().is_idle());
}

#[test]
fn test_second_output_press_replaces_pending_source() {
    let mut editor = Editor::default();
    editor.press_port(&and_port("out"));
    editor.press_port(&or_port("out"));
    editor.press_port(&and_port("in2"));

    let connections = editor.circuit().connections();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].from(), &or_port("out"));
    assert_eq!(connections[0].to(), &and_port("in2"));
}

#[test]
fn test_drag_moves_only_that_gate() {
    let mut editor = Editor::default();
    let before = positions(&editor);
    let offsets_before: Vec<_> = editor
        .circuit()
        .gates()
        .iter()
        .flat_map(|gate| gate.ports().iter().map(|port| port.offset()))
        .collect();

    editor.drag_gate(&GateId::from("gate-or-1"), Pos2::new(300.0, 320.0));
    editor.drag_gate(&GateId::from("gate-or-1"), Pos2::new(310.0, 330.0));

    let after = positions(&editor);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], (GateId::from("gate-or-1"), Pos2::new(310.0, 330.0)));

    let offsets_after: Vec<_> = editor
        .circuit()
        .gates()
        .iter()
        .flat_map(|gate| gate.ports().iter().map(|port| port.offset()))
        .collect();
    assert_eq!(offsets_before, offsets_after);
}

#[test]
fn test_and_or_scenario() {
    let mut editor = Editor::default();

    // AND.out -> OR.in1
    editor.press_port(&and_port("out"));
    editor.press_port(&or_port("in1"));
    assert_eq!(editor.circuit().connections().len(), 1);
    assert_eq!(editor.circuit().connections()[0].from(), &and_port("out"));
    assert_eq!(editor.circuit().connections()[0].to(), &or_port("in1"));
    assert!(editor.wiring().is_idle());

    // Wiring a gate back into itself is allowed
    editor.press_port(&and_port("out"));
    editor.press_port(&and_port("in1"));
    let connections = editor.circuit().connections();
    assert_eq!(connections.len(), 2);
    assert_eq!(connections[1].from(), &and_port("out"));
    assert_eq!(connections[1].to(), &and_port("in1"));
}

#[test]
fn test_custom_circuit() {
    let gates = vec![
        Gate::two_input("gate-xor-1", "XOR", Pos2::new(0.0, 0.0)),
        Gate::two_input("gate-not-1", "NOT", Pos2::new(200.0, 0.0)),
    ];
    let circuit = Circuit::new(gates).unwrap();
    let mut editor = Editor::new(circuit, EditorConfig::default());

    let out = PortId::from("port-gate-xor-1-out");
    assert_eq!(editor.circuit().ports().kind(&out), Some(PortKind::Out));

    editor.press_port(&out);
    editor.enter_port(&PortId::from("port-gate-not-1-in2"));
    editor.release_pointer();
    assert_eq!(editor.circuit().connections().len(), 1);
}
