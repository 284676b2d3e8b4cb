//! Distribution of options over the two picker groups

use crate::contract::{GuiPosition, OptionLayout, OptionSchema};

impl OptionLayout {
    /// Place options into the left and right groups
    ///
    /// Options go left while the left group has room and the option prefers
    /// left or has no preference, or the right group is already full.
    /// Everything else goes right, past `right_slots` if need be: the right
    /// group pages its overflow. Options hidden from the picker are left out.
    pub fn arrange<'a, I>(schemas: I, left_slots: usize, right_slots: usize) -> OptionLayout
    where
        I: IntoIterator<Item = &'a &'static OptionSchema>,
    {
        let mut layout = OptionLayout::default();
        for &schema in schemas {
            let left_has_room = layout.left.len() < left_slots;
            let right_full = layout.right.len() >= right_slots;
            match schema.gui_position {
                GuiPosition::None => continue,
                GuiPosition::Left | GuiPosition::Anywhere if left_has_room => {
                    layout.left.push(schema)
                }
                _ if left_has_room && right_full => layout.left.push(schema),
                _ => layout.right.push(schema),
            }
        }
        layout
    }
}
