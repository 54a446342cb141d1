use na_tagtree::{
    BinaryTag, ClickEvent, Component, CompoundTag, Error, IntTag, KeybindComponent, ListTag,
    Sound, SoundSource, StringTag, Style, TextColor, TextDecoration, TranslatableComponent,
    plain_text,
};

fn dump(tag: &BinaryTag) -> String {
    dump_inner(tag, 0)
}

fn dump_inner(tag: &BinaryTag, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match tag {
        BinaryTag::End => format!("{pad}End"),
        BinaryTag::Byte(v) => format!("{pad}Byte({})", v.value()),
        BinaryTag::Short(v) => format!("{pad}Short({})", v.value()),
        BinaryTag::Int(v) => format!("{pad}Int({})", v.value()),
        BinaryTag::Long(v) => format!("{pad}Long({})", v.value()),
        BinaryTag::Float(v) => format!("{pad}Float({})", v.value()),
        BinaryTag::Double(v) => format!("{pad}Double({})", v.value()),
        BinaryTag::ByteArray(v) => format!("{pad}ByteArray({} bytes)", v.len()),
        BinaryTag::String(v) => format!("{pad}String({:?})", v.value()),
        BinaryTag::IntArray(v) => format!("{pad}IntArray({} ints)", v.len()),
        BinaryTag::LongArray(v) => format!("{pad}LongArray({} longs)", v.len()),
        BinaryTag::List(list) => {
            let mut out = format!("{pad}List<{}>[{}] {{\n", list.element_type(), list.len());
            for item in list {
                out.push_str(&dump_inner(item, indent + 1));
                out.push('\n');
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
        BinaryTag::Compound(compound) => {
            let mut out = format!("{pad}Compound[{}] {{\n", compound.len());
            for (key, item) in compound {
                out.push_str(&format!("{pad}  {key:?}:\n"));
                out.push_str(&dump_inner(item, indent + 2));
                out.push('\n');
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let inventory = ListTag::builder()
        .add(
            CompoundTag::builder()
                .put("id", "minecraft:diamond_sword")
                .put("count", 1i8)
                .build(),
        )?
        .add(
            CompoundTag::builder()
                .put("id", "minecraft:bread")
                .put("count", 12i8)
                .build(),
        )?
        .build();

    let player = CompoundTag::builder()
        .put("name", "Steve")
        .put("health", 20.0f32)
        .put("pos", ListTag::from_tags([12.5f64, 64.0, -3.25])?)
        .put("inventory", inventory)
        .put("seen_chunks", vec![1i64, 2, 3])
        .build();

    println!("{}", dump(&BinaryTag::from(player.clone())));

    // Edits never touch the original.
    let hurt = player.put("health", 6.5f32);
    println!(
        "health before: {}, after: {}",
        player.get_float("health", 0.0),
        hurt.get_float("health", 0.0)
    );
    println!("health as int: {}", hurt.get_int("health", 0));

    let scores = ListTag::empty().add(IntTag::of(3))?;
    match scores.add(StringTag::of("three")) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {e}"),
    }

    let prompt = Component::text("Press ")
        .append(
            KeybindComponent::new("key.jump").with_style(
                Style::builder()
                    .color(TextColor::GOLD)
                    .decoration(TextDecoration::Bold, true)
                    .build(),
            ),
        )
        .append(" to jump");
    println!("{}", plain_text(&prompt));

    let death = TranslatableComponent::builder()
        .key("death.attack.player")
        .arg("Steve")
        .arg(Component::selector("@p"))
        .click_event(ClickEvent::suggest_command("/respawn"))
        .build()?;
    for property in death.examinable_properties() {
        println!("{} = {:?}", property.name(), property.value());
    }

    let missing = KeybindComponent::builder().color(TextColor::RED).build();
    println!("keybind builder: {:?}", missing.map(|_| ()));

    let levelup = Sound::builder()
        .name("entity.player.levelup".parse()?)
        .source(SoundSource::Player)
        .pitch(1.5)
        .build()?;
    println!(
        "sound {} on {} at {}x",
        levelup.name(),
        levelup.source().name(),
        levelup.pitch()
    );

    Ok(())
}
