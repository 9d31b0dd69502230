//! Language keywords and preprocessor directives.

use crate::signatures::{Category, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "keywords",
    category: Category::Keyword,
    include: None,
    entries: ENTRIES,
};

macro_rules! keyword {
    ($name:literal, $label:literal, $doc:literal) => {
        SignatureEntry {
            name: $name,
            documentation: $doc,
            label: $label,
            params: &[],
        }
    };
}

const ENTRIES: &[SignatureEntry] = &[
    // ==================== Directives ====================
    keyword!("#include", "#include \"[path\\]filename\"\n#include <filename>", "Includes a file in the current script. Angle brackets search the standard include folder first; quotes search the script folder first."),
    keyword!("#include-once", "#include-once", "Specifies that the current file should only be included once."),
    keyword!("#NoTrayIcon", "#NoTrayIcon", "Indicates that the AutoIt tray icon will not be shown when the script starts."),
    keyword!("#RequireAdmin", "#RequireAdmin", "Specifies that the current script requires full administrator rights to run."),
    keyword!("#OnAutoItStartRegister", "#OnAutoItStartRegister \"function\"", "Registers a function to be called when AutoIt starts."),
    keyword!("#pragma", "#pragma option(value)", "Changes how the script is compiled or run. Options include compile(...) settings used by Aut2Exe."),
    keyword!("#Region", "#Region [comment]", "Marks the start of a foldable region. Ignored by AutoIt."),
    keyword!("#EndRegion", "#EndRegion", "Marks the end of a foldable region. Ignored by AutoIt."),
    keyword!("#cs", "#cs ... #ce", "Begins a comment block, ended by #ce. Also written #comments-start."),
    keyword!("#ce", "#ce", "Ends a comment block started by #cs. Also written #comments-end."),
    // ==================== Declarations ====================
    keyword!("Global", "Global [Const] $variable [= initializer]", "Declares a variable in the global scope."),
    keyword!("Local", "Local [Const] $variable [= initializer]", "Declares a variable in the local scope of the current function."),
    keyword!("Dim", "Dim $variable [= initializer]", "Declares a variable in the local scope if it does not already exist in the global scope. Use of Local or Global is preferred."),
    keyword!("Const", "Const $variable = initializer", "Declares a constant. The value cannot be changed after declaration."),
    keyword!("Static", "Static $variable [= initializer]", "Declares a variable whose value persists between calls of the function it is declared in."),
    keyword!("ReDim", "ReDim $array[subscript 1]...[subscript n]", "Resizes an existing array, keeping its contents."),
    keyword!("Enum", "Enum [Step <stepval>] <constant> [= initializer] [, ...]", "Enumerates constants."),
    keyword!("ByRef", "Func name(ByRef $param)", "Passes a function parameter by reference."),
    // ==================== Functions ====================
    keyword!("Func", "Func functioname ( [[Const] ByRef] $param1, ..., [Const] [ByRef] $paramN, $optionalpar1 = value, ...)\n    ...\n    [Return [value]]\nEndFunc", "Defines a user-defined function that takes zero or more arguments and optionally returns a result."),
    keyword!("EndFunc", "EndFunc", "Ends a function definition."),
    keyword!("Return", "Return [value]", "Immediately ends execution of the current function and optionally returns a value."),
    // ==================== Conditionals ====================
    keyword!("If", "If <expression> Then\n    statements\n[ElseIf expression-n Then\n    [elseif statements ... ]]\n[Else\n    [else statements]]\nEndIf", "Conditionally run statements."),
    keyword!("Then", "If <expression> Then", "Ends the condition of an If or ElseIf statement."),
    keyword!("ElseIf", "ElseIf <expression> Then", "Additional condition of an If statement."),
    keyword!("Else", "Else", "Statements to run when no preceding condition of an If statement matched."),
    keyword!("EndIf", "EndIf", "Ends an If statement."),
    keyword!("Select", "Select\n    Case <expression>\n        statement1\n    [Case Else\n        statementN]\nEndSelect", "Conditionally run statements, testing a list of independent expressions."),
    keyword!("EndSelect", "EndSelect", "Ends a Select statement."),
    keyword!("Switch", "Switch <expression>\n    Case <value> [To <value>] [,<value> [To <value>] ...]\n        statement1\n    [Case Else\n        statementN]\nEndSwitch", "Conditionally run statements, comparing one expression against a list of values."),
    keyword!("Case", "Case <value>", "A branch of a Select or Switch statement."),
    keyword!("EndSwitch", "EndSwitch", "Ends a Switch statement."),
    // ==================== Loops ====================
    keyword!("For", "For <variable> = <start> To <stop> [Step <stepval>]\n    statements\nNext", "Loop based on an expression."),
    keyword!("In", "For <$Variable> In <expression>\n    statements\nNext", "Enumerates elements of an array or object collection."),
    keyword!("To", "For <variable> = <start> To <stop>", "Upper bound of a For loop or a range in a Switch Case."),
    keyword!("Step", "For <variable> = <start> To <stop> Step <stepval>", "Increment of a For loop."),
    keyword!("Next", "Next", "Ends a For loop."),
    keyword!("While", "While <expression>\n    statements\nWEnd", "Loop based on an expression, tested before each iteration."),
    keyword!("WEnd", "WEnd", "Ends a While loop."),
    keyword!("Do", "Do\n    statements\nUntil <expression>", "Loop based on an expression, tested after each iteration."),
    keyword!("Until", "Until <expression>", "Ends a Do loop."),
    keyword!("ContinueLoop", "ContinueLoop [level]", "Continues a While/Do/For loop."),
    keyword!("ExitLoop", "ExitLoop [level]", "Terminates a While/Do/For loop."),
    keyword!("With", "With <expression>\n    statements\nEndWith", "Used to reduce long references to object type variables."),
    keyword!("EndWith", "EndWith", "Ends a With statement."),
    // ==================== Misc ====================
    keyword!("Exit", "Exit [return code]", "Terminates the script."),
    keyword!("And", "<expression> And <expression>", "Logical AND operation."),
    keyword!("Or", "<expression> Or <expression>", "Logical OR operation."),
    keyword!("Not", "Not <expression>", "Logical NOT operation."),
    keyword!("True", "True", "Boolean true value."),
    keyword!("False", "False", "Boolean false value."),
    keyword!("Default", "Default", "Keyword value used to request the default value of an optional parameter."),
    keyword!("Null", "Null", "Null value, used with COM objects."),
];
