use highlightr_core::{HighlightrSession, Position, RopeBuffer, STRIP_COMMAND_ID, Settings};

fn main() {
    let session = HighlightrSession::new(Settings::default()).unwrap();
    let mut buffer = RopeBuffer::new("Remember the milk\nand the bread");

    // Highlight "milk".
    buffer.select(Position::new(0, 13), Position::new(0, 17));
    session.execute("Green", &mut buffer).unwrap();
    assert_eq!(
        buffer.text(),
        "Remember the <mark style=\"background: #BBFABBA6;\">milk</mark> \nand the bread"
    );

    // Highlight "bread" in another color.
    buffer.select(Position::new(1, 8), Position::new(1, 13));
    session.execute("Pink", &mut buffer).unwrap();

    // Remove every highlight in the document.
    buffer.select(Position::new(0, 0), Position::new(1, usize::MAX));
    session.execute(STRIP_COMMAND_ID, &mut buffer).unwrap();
    assert_eq!(buffer.text(), "Remember the milk \nand the bread ");

    println!("{}", buffer.text());
}
