mod command;
mod store;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
