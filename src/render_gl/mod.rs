mod shader;

pub use self::shader::{Shader, Program, Error};


mod vertex_buffer;
pub use self::vertex_buffer::{VertexBuffer, VertexArray};
