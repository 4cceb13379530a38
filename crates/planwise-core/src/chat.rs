//! Canned-response chat assistant.
//!
//! A deterministic keyword matcher behind a chat transcript, not a
//! reasoning system: gratitude ends the conversation with a farewell and
//! an auto-close, four keyword categories map to fixed replies, and
//! everything else gets an echo of the first three words.
//!
//! Like every time-dependent piece of this library, the assistant is a
//! wall-clock state machine without threads: the caller supplies `now` to
//! [`ChatAssistant::send`] and advances it with [`ChatAssistant::tick`].
//! Pending replies are plain data, so closing the assistant cancels them
//! and a late tick delivers nothing.

use std::collections::VecDeque;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Milliseconds of simulated typing before a normal reply.
pub const TYPING_DELAY_MS: u64 = 1500;
/// Milliseconds of simulated typing before the farewell reply.
pub const FAREWELL_DELAY_MS: u64 = 1000;
/// Milliseconds between the farewell and the auto-close.
pub const AUTO_CLOSE_DELAY_MS: u64 = 3000;

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str =
    "Hello! I'm your AI scheduler assistant. How can I help you today?";

/// Reply to gratitude, after which the conversation auto-closes.
pub const FAREWELL: &str =
    "You're welcome! If you need anything else, feel free to ask. I'll close this chat for now.";

/// Quick-start prompts offered next to the input field.
pub const QUICK_SUGGESTIONS: [&str; 5] = [
    "What tasks do I have today?",
    "Suggest optimal time for a meeting",
    "Add a reminder for tomorrow",
    "Analyze my productivity trends",
    "Reschedule my afternoon tasks",
];

/// Simulated reply delays, overridable through configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChatDelays {
    pub typing_ms: u64,
    pub farewell_ms: u64,
    pub auto_close_ms: u64,
}

impl Default for ChatDelays {
    fn default() -> Self {
        Self {
            typing_ms: TYPING_DELAY_MS,
            farewell_ms: FAREWELL_DELAY_MS,
            auto_close_ms: AUTO_CLOSE_DELAY_MS,
        }
    }
}

/// Gratitude markers that end the conversation. Checked before the keyword
/// categories.
const GRATITUDE_KEYWORDS: [&str; 3] = ["thank you", "thanks", "thankyou"];

/// Ordered keyword categories: `(keyword, keyword, reply)`. First matching
/// category wins.
const KEYWORD_REPLIES: [(&str, &str, &str); 4] = [
    (
        "task",
        "todo",
        "I see you're asking about tasks. Based on your schedule, you have 3 high priority tasks today. Would you like me to show you details?",
    ),
    (
        "meeting",
        "schedule",
        "Looking at your calendar, 2:30 PM or 4:00 PM would be optimal times for a new meeting today. Both slots have 30 minutes of free time before and after.",
    ),
    (
        "reminder",
        "tomorrow",
        "I can help set a reminder for tomorrow. What time and what should I remind you about?",
    ),
    (
        "productivity",
        "analyze",
        "Based on your patterns, you're most productive between 9AM-11AM. Would you like me to schedule high-priority tasks during this time?",
    ),
];

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub at: NaiveDateTime,
}

/// Conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatState {
    /// Nothing pending; ready for input.
    Idle,
    /// A reply is scheduled; the typing indicator shows.
    AwaitingResponse,
    /// Farewell delivered; the auto-close deadline is armed.
    Closing,
}

/// Observable state changes, returned by [`ChatAssistant::tick`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChatEvent {
    ReplyPosted { message: ChatMessage },
    Closed { at: NaiveDateTime },
}

/// A reply waiting for its delivery time.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PendingReply {
    due_at: NaiveDateTime,
    text: String,
    /// Farewells arm the auto-close when delivered.
    ends_conversation: bool,
}

/// The assistant: a transcript plus the reply/auto-close state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAssistant {
    messages: Vec<ChatMessage>,
    state: ChatState,
    open: bool,
    pending: VecDeque<PendingReply>,
    close_at: Option<NaiveDateTime>,
    #[serde(default)]
    delays: ChatDelays,
}

impl ChatAssistant {
    /// Open a fresh conversation with the greeting already posted.
    pub fn open(now: NaiveDateTime) -> Self {
        Self::open_with_delays(now, ChatDelays::default())
    }

    /// Open a fresh conversation with configured reply delays.
    pub fn open_with_delays(now: NaiveDateTime, delays: ChatDelays) -> Self {
        let greeting = ChatMessage {
            id: Uuid::new_v4(),
            sender: Sender::Assistant,
            text: GREETING.to_string(),
            at: now,
        };
        Self {
            messages: vec![greeting],
            state: ChatState::Idle,
            open: true,
            pending: VecDeque::new(),
            close_at: None,
            delays,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a reply is pending (drives the typing indicator).
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Post a user message and schedule its canned reply.
    ///
    /// Whitespace-only input is ignored, as is any input once the
    /// conversation is closed.
    pub fn send(&mut self, text: &str, now: NaiveDateTime) {
        if !self.open || text.trim().is_empty() {
            return;
        }

        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.to_string(),
            at: now,
        });

        let (text, ends_conversation) = reply_for(text);
        let delay_ms = if ends_conversation {
            self.delays.farewell_ms
        } else {
            self.delays.typing_ms
        };
        self.pending.push_back(PendingReply {
            due_at: now + millis(delay_ms),
            text,
            ends_conversation,
        });
        self.state = ChatState::AwaitingResponse;
        debug!(delay_ms, ends_conversation, "chat reply scheduled");
    }

    /// Deliver everything due by `now`.
    ///
    /// Returns observable changes in order: replies as they fall due, then
    /// the auto-close once its deadline passes. Replies scheduled during
    /// the closing window but still undelivered at the deadline are
    /// dropped with it.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<ChatEvent> {
        let mut events = Vec::new();

        while let Some(front) = self.pending.front() {
            if front.due_at > now {
                break;
            }
            let reply = match self.pending.pop_front() {
                Some(reply) => reply,
                None => break,
            };
            let message = ChatMessage {
                id: Uuid::new_v4(),
                sender: Sender::Assistant,
                text: reply.text,
                at: reply.due_at,
            };
            self.messages.push(message.clone());

            if reply.ends_conversation {
                self.state = ChatState::Closing;
                self.close_at = Some(reply.due_at + millis(self.delays.auto_close_ms));
            } else if self.pending.is_empty() && self.state == ChatState::AwaitingResponse {
                self.state = ChatState::Idle;
            }
            events.push(ChatEvent::ReplyPosted { message });
        }

        if let Some(close_at) = self.close_at {
            if now >= close_at && self.open {
                self.open = false;
                self.pending.clear();
                self.close_at = None;
                self.state = ChatState::Idle;
                events.push(ChatEvent::Closed { at: close_at });
                debug!("chat auto-closed");
            }
        }

        events
    }

    /// User-initiated teardown.
    ///
    /// Cancels pending replies and the auto-close; a later tick delivers
    /// nothing.
    pub fn close(&mut self) {
        self.open = false;
        self.pending.clear();
        self.close_at = None;
        self.state = ChatState::Idle;
        debug!("chat closed by user");
    }
}

/// Pick the canned reply for a user message.
///
/// Returns `(reply text, whether it ends the conversation)`.
fn reply_for(text: &str) -> (String, bool) {
    let lowered = text.to_lowercase();

    if GRATITUDE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return (FAREWELL.to_string(), true);
    }

    for (first, second, reply) in KEYWORD_REPLIES {
        if lowered.contains(first) || lowered.contains(second) {
            return (reply.to_string(), false);
        }
    }

    let topic: Vec<&str> = text.split_whitespace().take(3).collect();
    let echoed = format!(
        "I understand you're asking about {}... Is there a specific way I can help you with your scheduling or tasks?",
        topic.join(" ")
    );
    (echoed, false)
}

fn millis(ms: u64) -> Duration {
    Duration::milliseconds(ms as i64)
}
