// Host-side tests for the orbit session: card registry, drag wiring and viewer.

use orbit_core::{
    closes_on_click, fallback_photos, is_dismiss_key, CardFactory, CardTransform, ClickTarget,
    DragPhase, InputSource, OrbitSession, Photo, VisualCard,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Fake stage: tracks how many card elements are attached.
#[derive(Default)]
struct Stage {
    attached: Vec<usize>,
    created_total: usize,
}

struct FakeCard {
    index: usize,
    label: String,
    front: bool,
    transform: Option<CardTransform>,
}

impl VisualCard for FakeCard {
    fn set_transform(&mut self, transform: &CardTransform) {
        self.transform = Some(*transform);
    }
    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }
    fn set_front(&mut self, front: bool) {
        self.front = front;
    }
}

struct FakeFactory {
    stage: Rc<RefCell<Stage>>,
}

impl CardFactory for FakeFactory {
    type Card = FakeCard;

    fn clear(&mut self) {
        self.stage.borrow_mut().attached.clear();
    }

    fn create(&mut self, index: usize, _photo: &Photo) -> FakeCard {
        let mut stage = self.stage.borrow_mut();
        stage.attached.push(index);
        stage.created_total += 1;
        FakeCard {
            index,
            label: String::new(),
            front: false,
            transform: None,
        }
    }
}

fn setup() -> (OrbitSession<FakeCard>, FakeFactory, Rc<RefCell<Stage>>) {
    let stage = Rc::new(RefCell::new(Stage::default()));
    let factory = FakeFactory {
        stage: stage.clone(),
    };
    (OrbitSession::new(), factory, stage)
}

fn photo(url: &str, title: &str) -> Photo {
    Photo::new(url, title, "", "")
}

#[test]
fn rebuild_matches_photo_count_without_accumulating() {
    let (mut session, mut factory, stage) = setup();
    session.show_fallback(&mut factory);
    assert_eq!(session.cards().len(), session.photos().len());
    assert_eq!(stage.borrow().attached.len(), 7);

    session.rebuild(&mut factory);
    assert_eq!(session.cards().len(), 7);
    assert_eq!(stage.borrow().attached, (0..7).collect::<Vec<_>>());
    assert_eq!(stage.borrow().created_total, 14);

    let replacement = vec![photo("a.jpg", "A"), photo("b.jpg", "")];
    session.replace_photos(replacement, &mut factory);
    assert_eq!(session.cards().len(), 2);
    assert_eq!(stage.borrow().attached.len(), 2);
}

#[test]
fn cards_carry_index_and_label() {
    let (mut session, mut factory, _) = setup();
    session.replace_photos(vec![photo("a.jpg", "A"), photo("b.jpg", "")], &mut factory);
    let cards = session.cards();
    assert_eq!(cards[0].index, 0);
    assert_eq!(cards[0].label, "A");
    assert_eq!(cards[1].index, 1);
    assert_eq!(cards[1].label, "photo #2");
    assert!(cards.iter().all(|c| c.transform.is_some()));
}

#[test]
fn rebuild_keeps_exactly_one_front() {
    let (mut session, mut factory, _) = setup();
    session.show_fallback(&mut factory);
    assert_eq!(session.front_index(), Some(0));
    assert_eq!(session.cards().iter().filter(|c| c.front).count(), 1);
    assert!(session.cards()[0].front);
}

#[test]
fn drag_rotates_and_relayouts() {
    let (mut session, mut factory, _) = setup();
    session.replace_photos(
        (0..4).map(|i| photo(&format!("{i}.jpg"), "")).collect(),
        &mut factory,
    );
    session.drag_start(InputSource::Pointer(1), 0.0);
    session.drag_move(InputSource::Pointer(1), 200.0);
    session.drag_move(InputSource::Pointer(1), 360.0);
    assert!((session.base_rotation() - (-90.0)).abs() < 1e-9);
    assert_eq!(session.front_index(), Some(1));
    assert!(session.cards()[1].front);
}

#[test]
fn release_coasts_until_rest() {
    let (mut session, mut factory, _) = setup();
    session.show_fallback(&mut factory);
    session.drag_start(InputSource::Touch, 0.0);
    session.drag_move(InputSource::Touch, 20.0);
    let after_drag = session.base_rotation();

    assert!(session.drag_end(InputSource::Touch));
    // the first inertia frame is applied at release
    let after_release = session.base_rotation();
    assert!(after_release < after_drag);
    assert_eq!(session.drag_phase(), DragPhase::Coasting);

    let mut frames = 0;
    while session.inertia_step() {
        frames += 1;
        assert!(frames < 1000);
    }
    assert_eq!(session.drag_phase(), DragPhase::Idle);
    assert!(session.base_rotation() < after_release);
}

#[test]
fn new_drag_cancels_inertia() {
    let (mut session, mut factory, _) = setup();
    session.show_fallback(&mut factory);
    session.drag_start(InputSource::Pointer(1), 0.0);
    session.drag_move(InputSource::Pointer(1), 40.0);
    assert!(session.drag_end(InputSource::Pointer(1)));

    session.drag_start(InputSource::Pointer(1), 10.0);
    let rot = session.base_rotation();
    assert!(!session.inertia_step());
    assert_eq!(session.base_rotation(), rot);
    assert_eq!(session.drag_phase(), DragPhase::Dragging);
}

#[test]
fn viewer_uses_placeholders() {
    let (mut session, mut factory, _) = setup();
    session.replace_photos(
        vec![
            Photo::new("a.jpg", "", "", ""),
            Photo::new("b.jpg", "Beach", "2024-05-01", "Sunset walk"),
        ],
        &mut factory,
    );
    let content = session.open_viewer(0).expect("in range");
    assert_eq!(content.title, "photo #1");
    assert_eq!(content.date, "");
    assert_eq!(content.description, "Today's photo.");
    assert_eq!(content.image_url, "a.jpg");

    let content = session.open_viewer(1).expect("in range");
    assert_eq!(content.title, "Beach");
    assert_eq!(content.date, "2024-05-01");
    assert_eq!(content.description, "Sunset walk");
    assert_eq!(session.viewer().current(), Some(1));
}

#[test]
fn viewer_ignores_out_of_range_and_closes_once() {
    let (mut session, mut factory, _) = setup();
    session.show_fallback(&mut factory);
    assert!(session.open_viewer(fallback_photos().len()).is_none());
    assert!(!session.viewer().is_open());

    session.open_viewer(2);
    assert!(session.viewer().is_open());
    assert!(session.close_viewer());
    assert!(!session.close_viewer());
}

#[test]
fn replacing_photos_closes_the_viewer() {
    let (mut session, mut factory, _) = setup();
    session.show_fallback(&mut factory);
    session.open_viewer(6).expect("in range");

    session.replace_photos(vec![photo("a.jpg", "A"), photo("b.jpg", "B")], &mut factory);
    assert!(!session.viewer().is_open());
    assert_eq!(session.viewer().current(), None);
    assert!(!session.close_viewer());
}

#[test]
fn viewer_dismissal_rules() {
    assert!(closes_on_click(ClickTarget::Root));
    assert!(closes_on_click(ClickTarget::Backdrop));
    assert!(!closes_on_click(ClickTarget::Content));
    assert!(is_dismiss_key("Escape"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("escape"));
}
