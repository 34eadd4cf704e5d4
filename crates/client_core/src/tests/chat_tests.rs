use super::*;

use tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver},
};

fn scheduler() -> (Scheduler, UnboundedReceiver<KioskEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Scheduler::new(Handle::current(), tx), rx)
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn apply(panel: &mut ChatPanel, rx: &mut UnboundedReceiver<KioskEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            KioskEvent::FacultyReply => {
                panel.push_faculty_reply();
            }
            KioskEvent::VoiceCaptured { generation } => {
                panel.finish_voice_capture(generation);
            }
            KioskEvent::HideBanner {
                slot: BannerSlot::ChatConfirmation,
                generation,
            } => panel.expire_confirmation(generation),
            other => panic!("unexpected event {}", other.name()),
        }
    }
}

#[test]
fn starts_closed_with_faculty_greeting() {
    let panel = ChatPanel::new();
    assert!(!panel.is_open());
    assert_eq!(panel.messages().len(), 1);
    assert_eq!(panel.messages()[0].text, GREETING);
    assert_eq!(panel.messages()[0].sender, Sender::Faculty);
}

#[test]
fn open_is_idempotent() {
    let mut panel = ChatPanel::new();
    panel.open();
    panel.open();
    assert!(panel.is_open());
    panel.close();
    assert!(!panel.is_open());
}

#[tokio::test(start_paused = true)]
async fn whitespace_only_input_sends_nothing() {
    let (scheduler, mut rx) = scheduler();
    let mut panel = ChatPanel::new();
    panel.input = "   \t ".to_string();

    assert!(!panel.send(&scheduler));
    advance(2000).await;
    apply(&mut panel, &mut rx);

    assert_eq!(panel.messages().len(), 1);
    assert!(panel.confirmation().is_none());
}

#[tokio::test(start_paused = true)]
async fn send_appends_student_then_scripted_faculty_reply() {
    let (scheduler, mut rx) = scheduler();
    let mut panel = ChatPanel::new();
    panel.input = "Is the lab open today?".to_string();

    assert!(panel.send(&scheduler));
    assert!(panel.input.is_empty());
    assert_eq!(panel.messages().len(), 2);
    assert_eq!(panel.messages()[1].sender, Sender::Student);
    assert_eq!(panel.messages()[1].text, "Is the lab open today?");
    assert_eq!(
        panel.confirmation().map(|b| b.message.as_str()),
        Some("Message sent to Faculty via SMS")
    );

    advance(1499).await;
    apply(&mut panel, &mut rx);
    assert_eq!(panel.messages().len(), 2);

    advance(1).await;
    apply(&mut panel, &mut rx);
    assert_eq!(panel.messages().len(), 3);
    let reply = &panel.messages()[2];
    assert_eq!(reply.sender, Sender::Faculty);
    assert_eq!(reply.text, FACULTY_REPLY);
    assert!(panel.messages()[1].id < reply.id);
    assert!(panel.messages()[0].id < panel.messages()[1].id);

    advance(1500).await;
    apply(&mut panel, &mut rx);
    assert!(panel.confirmation().is_none());
}

#[tokio::test(start_paused = true)]
async fn confirmation_names_selected_channel() {
    let (scheduler, _rx) = scheduler();
    let mut panel = ChatPanel::new();
    panel.set_channel(DeliveryChannel::WhatsApp);
    panel.input = "hi".to_string();

    panel.send(&scheduler);

    assert_eq!(
        panel.confirmation().map(|b| b.message.as_str()),
        Some("Message sent to Faculty via WHATSAPP")
    );
}

#[tokio::test(start_paused = true)]
async fn voice_capture_fills_canned_phrase() {
    let (scheduler, mut rx) = scheduler();
    let mut panel = ChatPanel::new();

    panel.toggle_voice(&scheduler);
    assert!(panel.is_listening());
    panel.input = "typed while listening".to_string();
    assert!(!panel.can_send());

    advance(2000).await;
    apply(&mut panel, &mut rx);

    assert!(!panel.is_listening());
    assert_eq!(panel.input, VOICE_PHRASE);
}

#[tokio::test(start_paused = true)]
async fn stopping_voice_capture_discards_result() {
    let (scheduler, mut rx) = scheduler();
    let mut panel = ChatPanel::new();

    panel.toggle_voice(&scheduler);
    advance(500).await;
    panel.toggle_voice(&scheduler);
    advance(3000).await;
    apply(&mut panel, &mut rx);

    assert!(!panel.is_listening());
    assert!(panel.input.is_empty());
}
