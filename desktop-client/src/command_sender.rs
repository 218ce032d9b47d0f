use tokio::sync::mpsc;
use snake_common::InputCommand;
use crate::state::ClientCommand;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, cmd: ClientCommand) {
        let _ = self.tx.send(cmd);
    }

    pub fn send_input(&self, command: InputCommand) {
        self.send(ClientCommand::Input(command));
    }
}
