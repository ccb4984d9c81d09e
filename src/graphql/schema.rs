//! Schema definition served to clients.

/// GraphQL SDL describing every operation the resolver accepts.
pub const TASK_SCHEMA_SDL: &str = r"type Task {
  _id: ID!
  taskName: String!
  description: String!
  isDone: Boolean!
  priority: Int!
  tags: [String]
  userId: String!
  createdAt: String
  updatedAt: String
}

type Query {
  getUserDoneTasks(userId: String!): [Task]
  getUserActiveTasks(userId: String!): [Task]
  getUserTasks(userId: String!): [Task]
  getTask(taskId: ID!, userId: String!): Task
}

type Mutation {
  addTask(
    taskName: String!
    description: String!
    priority: Int!
    tags: [String]
    userId: String!
  ): Task
  updateTask(
    taskId: ID!
    taskName: String
    description: String
    priority: Int
    isDone: Boolean
    tags: [String]
    userId: String!
  ): Task
  deleteTask(taskId: ID!, userId: String!): String
}
";
