fn main() -> anyhow::Result<()> {
    soundboard_lib::run()
}
