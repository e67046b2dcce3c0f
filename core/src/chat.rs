use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    /// Content is an opaque asset location.
    Sticker,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub kind: MessageKind,
    pub content: String,
    pub sender: Sender,
}

/// Message as written in the script, before it gets an id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageDraft {
    pub kind: MessageKind,
    pub content: &'static str,
    pub sender: Sender,
}

impl MessageDraft {
    pub const fn bot(content: &'static str) -> Self {
        Self {
            kind: MessageKind::Text,
            content,
            sender: Sender::Bot,
        }
    }

    pub const fn user(content: &'static str) -> Self {
        Self {
            kind: MessageKind::Text,
            content,
            sender: Sender::User,
        }
    }

    pub const fn sticker(location: &'static str) -> Self {
        Self {
            kind: MessageKind::Sticker,
            content: location,
            sender: Sender::Bot,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Yes,
    No,
}

/// Which question the yes/no buttons answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceStage {
    Initial,
    Confirmation,
}

impl ChoiceStage {
    pub const fn label(self, choice: Choice) -> &'static str {
        match (self, choice) {
            (Self::Initial, Choice::Yes) => "Yes, please!",
            (Self::Initial, Choice::No) => "No thanks",
            (Self::Confirmation, Choice::Yes) => "Okay, tell me!",
            (Self::Confirmation, Choice::No) => "No, really",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing(bool),
    Say(MessageDraft),
    Offer(ChoiceStage),
    Complete,
}

/// The bot conversation: a fixed intro followed by a two-level yes/no tree.
pub struct ChatScript;

impl ChatScript {
    pub fn intro() -> Timeline<ChatAction> {
        use ChatAction::*;

        Timeline::new()
            .immediately(Typing(true))
            .then(1500, Say(MessageDraft::bot("Hey there! I want to say something.")))
            .then(1500, Say(MessageDraft::bot("Do you want to hear it?")))
            .immediately(Typing(false))
            .immediately(Offer(ChoiceStage::Initial))
    }

    pub fn reply(stage: ChoiceStage, choice: Choice) -> Timeline<ChatAction> {
        use ChatAction::*;
        use ChoiceStage::*;

        match (stage, choice) {
            (Initial, Choice::Yes) => Self::happy_ending("Yes!"),
            (Confirmation, Choice::Yes) => Self::happy_ending("Okay, tell me!"),
            (Initial, Choice::No) => Timeline::new()
                .immediately(Say(MessageDraft::user("No")))
                .immediately(Typing(true))
                .then(1000, Say(MessageDraft::sticker(stickers::SAD)))
                .then(1500, Say(MessageDraft::bot("Really don't want to know?")))
                .immediately(Say(MessageDraft::sticker(stickers::CONFIRMATION)))
                .immediately(Typing(false))
                .immediately(Offer(Confirmation)),
            (Confirmation, Choice::No) => Timeline::new()
                .immediately(Say(MessageDraft::user("No, I'm good")))
                .immediately(Typing(true))
                .then(1000, Say(MessageDraft::sticker(stickers::SAD)))
                .then(1500, Say(MessageDraft::bot("I will still do it btw...")))
                .then(1000, Say(MessageDraft::sticker(stickers::OOPS)))
                .then(3000, Complete),
        }
    }

    fn happy_ending(answer: &'static str) -> Timeline<ChatAction> {
        use ChatAction::*;

        Timeline::new()
            .immediately(Say(MessageDraft::user(answer)))
            .immediately(Typing(true))
            .then(1000, Say(MessageDraft::sticker(stickers::HAPPY)))
            .then(2500, Complete)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChatSignal {
    Continue,
    Finished,
}

/// Conversation state built up by applying script actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u32,
    typing: bool,
    offered: Option<ChoiceStage>,
    finished: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// The stage whose buttons are showing, if any.
    pub fn offered(&self) -> Option<ChoiceStage> {
        self.offered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn apply(&mut self, action: ChatAction) -> ChatSignal {
        match action {
            ChatAction::Typing(typing) => self.typing = typing,
            ChatAction::Say(draft) => self.push(draft),
            ChatAction::Offer(stage) => self.offered = Some(stage),
            ChatAction::Complete if self.finished => {
                log::warn!("chat already finished");
            }
            ChatAction::Complete => {
                self.finished = true;
                log::debug!("chat finished after {} message(s)", self.messages.len());
                return ChatSignal::Finished;
            }
        }
        ChatSignal::Continue
    }

    /// Takes the answer to the offered question and hides the buttons.
    pub fn choose(&mut self, choice: Choice) -> Result<Timeline<ChatAction>> {
        let stage = self.offered.take().ok_or(FlowError::NoChoicePending)?;
        log::debug!("chat choice {:?} at {:?}", choice, stage);
        Ok(ChatScript::reply(stage, choice))
    }

    fn push(&mut self, draft: MessageDraft) {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.messages.push(ChatMessage {
            id,
            kind: draft.kind,
            content: draft.content.into(),
            sender: draft.sender,
        });
    }
}
