//! Chat-channel messages: joining, leaving, membership, and channel text.

use registry::codes;
use wire::{Fields, LineBuilder, TEXT_SEP};

use crate::shape;

/// Client request to join or create a chat channel; also echoed by the
/// server to announce another member joining.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinChannel {
    pub nickname: String,
    /// Optional; travels as the empty-field sentinel when blank.
    pub password: String,
    /// Unused optional server host, by convention `-`.
    pub host: String,
    pub channel: String,
}

impl JoinChannel {
    pub fn encode(&self) -> String {
        shape::encode_join(
            codes::JOIN_CHANNEL,
            &self.nickname,
            &self.password,
            &self.host,
            &self.channel,
        )
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (nickname, password, host, channel) = shape::parse_join(body)?;
        Some(Self {
            nickname,
            password,
            host,
            channel,
        })
    }
}

/// Server authorization for a channel join request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinChannelAuth {
    pub channel: String,
}

impl JoinChannelAuth {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::JOIN_CHANNEL_AUTH, &self.channel)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|channel| Self { channel })
    }
}

/// A line of chat said into a channel.
///
/// The text may contain the secondary separator, so the body uses the
/// NUL inner separator instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelTextMsg {
    pub channel: String,
    pub nickname: String,
    pub text: String,
}

impl ChannelTextMsg {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::CHANNEL_TEXT_MSG);
        b.param(&self.channel)
            .raw_char(TEXT_SEP)
            .raw(&self.nickname)
            .raw_char(TEXT_SEP)
            .raw(&self.text);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::split_on(body, TEXT_SEP);
        let channel = f.next_str().ok()?.to_owned();
        let nickname = f.next_str().ok()?.to_owned();
        let text = f.next_str().ok()?.to_owned();
        Some(Self {
            channel,
            nickname,
            text,
        })
    }
}

/// Client notice that it is leaving a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaveChannel {
    pub nickname: String,
    /// Unused optional server host, by convention `-`.
    pub host: String,
    pub channel: String,
}

impl LeaveChannel {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::LEAVE_CHANNEL);
        b.param(&self.nickname).field(&self.host).field(&self.channel);
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        let mut f = Fields::new(body);
        let nickname = f.next_string().ok()?;
        let host = f.next_string().ok()?;
        let channel = f.next_string().ok()?;
        Some(Self {
            nickname,
            host,
            channel,
        })
    }
}

/// Server announcement of a newly created channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewChannel {
    pub channel: String,
}

impl NewChannel {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::NEW_CHANNEL, &self.channel)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|channel| Self { channel })
    }
}

/// Server announcement that an emptied channel was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteChannel {
    pub channel: String,
}

impl DeleteChannel {
    pub fn encode(&self) -> String {
        shape::encode_name_only(codes::DELETE_CHANNEL, &self.channel)
    }

    pub fn parse(body: &str) -> Option<Self> {
        shape::parse_name_only(body).map(|channel| Self { channel })
    }
}

/// The channel list sent to a connecting client. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Channels {
    pub channels: Vec<String>,
}

impl Channels {
    pub fn encode(&self) -> String {
        let mut b = LineBuilder::new(codes::CHANNELS);
        if let Some((first, rest)) = self.channels.split_first() {
            b.param(first);
            for ch in rest {
                b.field(ch);
            }
        } else {
            b.param("");
        }
        b.finish()
    }

    pub fn parse(body: &str) -> Option<Self> {
        Some(Self {
            channels: Fields::new(body).tail(),
        })
    }
}

/// The member list of one channel, sent on join.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelMembers {
    pub channel: String,
    pub members: Vec<String>,
}

impl ChannelMembers {
    pub fn encode(&self) -> String {
        shape::encode_name_tail(codes::CHANNEL_MEMBERS, &self.channel, &self.members)
    }

    pub fn parse(body: &str) -> Option<Self> {
        let (channel, members) = shape::parse_name_tail(body)?;
        Some(Self { channel, members })
    }
}

/// Client notice that it is leaving every channel and game, typically
/// just before disconnecting. Bodyless on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaveAll;

impl LeaveAll {
    pub fn encode(&self) -> String {
        LineBuilder::new(codes::LEAVE_ALL).finish()
    }

    pub fn parse(_body: &str) -> Option<Self> {
        Some(Self)
    }
}
