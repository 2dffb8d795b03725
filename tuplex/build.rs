use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The longest list exercised by the generated tests.
const MAX_LENGTH: usize = 40;

/// Element types cycled through by position, so that neighbouring elements differ in type.
const TYPES: [&str; 5] = ["u8", "u16", "u32", "u64", "i64"];

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for lists of every length up to a bound, checking that access,
    // size, borrowed views and concatenation hold for every position. This catches a recursion
    // that goes wrong, or gets slow to type-check, only at some depth.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("deep_lists.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "use crate::{{concat, Concat, Forward, Nil, TypeList}};")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    for length in 1..=MAX_LENGTH {
        write_test(&mut f, length)?;
    }
    Ok(())
}

fn write_test(f: &mut File, length: usize) -> Result<(), Box<dyn Error>> {
    let split = length / 2;
    let elements: Vec<Element> = (0..length).map(Element).collect();
    let (left, right) = elements.split_at(split);

    writeln!(f, "#[test]")?;
    writeln!(f, "fn deep_list_{}() {{", length)?;
    writeln!(f, "    type Full = Tuplex![{}];", types(&elements))?;
    writeln!(f, "    type Left = Tuplex![{}];", types(left))?;
    writeln!(f, "    type Right = Tuplex![{}];", types(right))?;
    writeln!(f, "    assert_type_eq_all!(Concat<(Left, Right)>, Full);")?;
    writeln!(f)?;
    writeln!(f, "    let mut list: Full = tuplex!({});", values(&elements))?;
    writeln!(f, "    assert_eq!(Full::LEN, {});", length)?;
    for element in &elements {
        writeln!(
            f,
            "    assert_eq!(*list.get::<{i}>(), {v});",
            i = element.0,
            v = element.value()
        )?;
    }
    for element in &elements {
        writeln!(f, "    *list.get_mut::<{}>() += 1;", element.0)?;
    }
    let last = &elements[length - 1];
    writeln!(
        f,
        "    assert_eq!(*(&list).forward().take::<{}>(), {} + 1);",
        last.0,
        last.value()
    )?;
    writeln!(f, "    *(&mut list).forward().take::<{}>() -= 1;", last.0)?;
    writeln!(f, "    assert_eq!(concat((&list,)), list);")?;
    writeln!(f, "    assert_eq!(list.take::<{}>(), {});", last.0, last.value())?;
    writeln!(f)?;
    writeln!(f, "    let left: Left = tuplex!({});", values(left))?;
    writeln!(f, "    let mut right: Right = tuplex!({});", values(right))?;
    writeln!(f, "    let expected: Full = tuplex!({});", values(&elements))?;
    writeln!(f, "    assert_eq!(concat((&left, &mut right)), expected);")?;
    writeln!(f, "    assert_eq!(concat((Nil, left, Nil, right, Nil)), expected);")?;
    writeln!(f, "}}")?;
    writeln!(f)?;
    Ok(())
}

/// The element at a position: its type is picked from [`TYPES`] and its value is the position.
struct Element(usize);

impl Element {
    fn ty(&self) -> &'static str {
        TYPES[self.0 % TYPES.len()]
    }

    fn value(&self) -> String {
        format!("{}{}", self.0, self.ty())
    }
}

fn types(elements: &[Element]) -> String {
    elements.iter().map(Element::ty).collect::<Vec<_>>().join(", ")
}

fn values(elements: &[Element]) -> String {
    elements
        .iter()
        .map(Element::value)
        .collect::<Vec<_>>()
        .join(", ")
}
