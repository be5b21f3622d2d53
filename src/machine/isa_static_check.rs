#[cfg(test)]
mod tests {
    use crate::machine::isa::Instruction;

    macro_rules! check_isa {
        (
            $( $(#[$doc:meta])* $name:ident = $opcode:expr, $mnemonic:literal => [ $( $field:ident : $kind:ident ),* $(,)? ] ),* $(,)?
        ) => {{
            $(
                let declared = (&[ $( stringify!($field), )* ] as &[&str]).len() as u8;
                let instr = Instruction::$name;
                assert_eq!(
                    instr.operand_count(),
                    declared,
                    "{}: operand-count bits disagree with the declared operand list",
                    $mnemonic
                );
            )*
        }};
    }

    #[test]
    fn operand_count_bits_match_table() {
        crate::for_each_instruction!(check_isa);
    }

    #[test]
    fn sets_pc_only_for_control_flow() {
        for &instr in Instruction::ALL {
            let expected = matches!(instr, Instruction::Call | Instruction::Ret);
            assert_eq!(
                instr.sets_pc(),
                expected,
                "{}: unexpected sets-PC bit",
                instr.mnemonic()
            );
        }
    }

    #[test]
    fn alu_bit_matches_alu_operations() {
        for &instr in Instruction::ALL {
            let expected = matches!(
                instr,
                Instruction::Add | Instruction::Mul | Instruction::And | Instruction::Cmp
            );
            assert_eq!(
                instr.is_alu(),
                expected,
                "{}: unexpected ALU-class bit",
                instr.mnemonic()
            );
        }
    }

    #[test]
    fn opcodes_are_unique() {
        for (i, a) in Instruction::ALL.iter().enumerate() {
            for b in &Instruction::ALL[i + 1..] {
                assert_ne!(*a as u8, *b as u8, "{} and {}", a.mnemonic(), b.mnemonic());
            }
        }
    }
}
