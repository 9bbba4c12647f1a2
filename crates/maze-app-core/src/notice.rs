// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Short-lived HUD notices with TTL, a capacity bound and repeat folding.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// Something went wrong but the session continues.
    Warn,
}

/// Identifier handed out by [`NoticeBoard::post`].
pub type NoticeId = u64;

#[derive(Debug, Clone)]
struct Notice {
    id: NoticeId,
    level: NoticeLevel,
    text: String,
    ttl: Duration,
    posted: Instant,
    repeats: u32,
}

/// Render view of a live notice.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeView {
    /// Stable identifier.
    pub id: NoticeId,
    /// Severity.
    pub level: NoticeLevel,
    /// Message.
    pub text: String,
    /// How many times the same message was posted while live.
    pub repeats: u32,
    /// Fraction of the TTL left, `1.0` when fresh.
    pub remaining: f32,
}

/// Bounded FIFO of notices; the oldest is evicted when full.
#[derive(Debug)]
pub struct NoticeBoard {
    queue: VecDeque<Notice>,
    capacity: usize,
    next_id: NoticeId,
}

impl NoticeBoard {
    /// Board holding at most `capacity` notices (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    /// Posts a notice. Posting the same level and text while an earlier copy
    /// is still live refreshes that copy instead of adding another.
    pub fn post(
        &mut self,
        level: NoticeLevel,
        text: impl Into<String>,
        ttl: Duration,
        now: Instant,
    ) -> NoticeId {
        let text = text.into();
        if let Some(live) = self.queue.iter_mut().find(|n| {
            n.level == level && n.text == text && now.duration_since(n.posted) < n.ttl
        }) {
            live.posted = now;
            live.ttl = ttl;
            live.repeats += 1;
            return live.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice {
            id,
            level,
            text,
            ttl,
            posted: now,
            repeats: 1,
        });
        id
    }

    /// Drops expired notices.
    pub fn prune(&mut self, now: Instant) {
        self.queue.retain(|n| now.duration_since(n.posted) < n.ttl);
    }

    /// Live notices, oldest first.
    pub fn visible(&self, now: Instant) -> Vec<NoticeView> {
        self.queue
            .iter()
            .filter(|n| now.duration_since(n.posted) < n.ttl)
            .map(|n| NoticeView {
                id: n.id,
                level: n.level,
                text: n.text.clone(),
                repeats: n.repeats,
                remaining: 1.0
                    - now.duration_since(n.posted).as_secs_f32() / n.ttl.as_secs_f32(),
            })
            .collect()
    }

    /// `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
