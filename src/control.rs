use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::KeyMap;

use termion::event::Event;
use unsegen::input::Input;

/// A receiver of picker commands. Commands the receiver does not handle
/// itself are passed back to the caller unchanged.
pub trait Control {
    fn send_cmd(&mut self, cmd: &Cmd) -> CmdResult;
}

/// Translates raw terminal input into commands via the configured key map
/// and feeds them to the wrapped receiver.
pub struct Controller<'a, C: Control> {
    key_map: &'a KeyMap,
    recvr: C,
}

impl<'a, C: Control> Controller<'a, C> {
    pub fn new(key_map: &'a KeyMap, recvr: C) -> Controller<'a, C> {
        Controller { key_map, recvr }
    }

    pub fn handle(&mut self, input: Input) -> CmdResult {
        match input.event {
            Event::Key(key) => match self.key_map.get(&key) {
                Some(cmd) => self.recvr.send_cmd(cmd),
                None => Err(CmdError::new(format!(
                    "no command bound to input key '{:?}'",
                    key
                ))),
            },
            _ => Ok(Cmd::Noop),
        }
    }

    pub fn inner(&self) -> &C {
        &self.recvr
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.recvr
    }
}
